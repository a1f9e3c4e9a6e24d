use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlobError {
    #[error("Blob too small: {actual} bytes, layer tables need {expected}")]
    FileTooSmall { expected: usize, actual: usize },

    #[error("Truncated record at offset {0:#06x}")]
    Truncated(usize),

    #[error("Record at offset {0:#x} is beyond 16-bit range")]
    OffsetRange(usize),

    #[error("Record {record:#06x} references {target:#06x}, which is not a record start")]
    DanglingKeyReference { record: u16, target: u16 },

    #[error("Layer {layer} cell {cell} references {target:#06x}, which is not a record start")]
    DanglingCellReference { layer: usize, cell: usize, target: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BlobError>;
