//! Output visibility of nodes brought in by reference imports.

/// Visibility bookkeeping shared by every rule node.
///
/// A positive block count hides the node from output. A mixin call from a
/// blocked context adds a block to everything it expands.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Visibility {
    pub blocks: u32,
}

impl Visibility {
    #[inline]
    pub fn blocks_visibility(self) -> bool {
        self.blocks > 0
    }

    #[must_use]
    pub fn add_block(self) -> Self {
        Visibility {
            blocks: self.blocks + 1,
        }
    }

    /// Whether the node appears in generated CSS.
    pub fn is_visible(self) -> bool {
        !self.blocks_visibility()
    }
}
