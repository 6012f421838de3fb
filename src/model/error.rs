/// Error type for dashboard operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}
