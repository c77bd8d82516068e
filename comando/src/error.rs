#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, DescriptorError>;
