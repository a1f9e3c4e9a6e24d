/// Switch positions on the ErgoDox EZ, left half first, row-major.
pub const GRID_CELLS: usize = 76;

/// One keymap layer: a virtual key name per switch position.
///
/// An empty name means the position does nothing on this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    cells: Vec<String>,
}

impl Layer {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// A layer with every position unassigned.
    pub fn empty(cells: usize) -> Self {
        Self {
            cells: vec![String::new(); cells],
        }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_layer() {
        let layer = Layer::empty(GRID_CELLS);
        assert_eq!(layer.len(), GRID_CELLS);
        assert!(layer.cells().iter().all(String::is_empty));
    }

    #[test]
    fn test_new_keeps_order() {
        let layer = Layer::new(["", "f1", ""]);
        assert_eq!(layer.len(), 3);
        assert_eq!(layer.cells(), &["", "f1", ""]);
    }
}
