//! Shared child-list management for container nodes.

use geom::{Insets, Rect};

use crate::{Error, Result, node::View};

/// The state shared by every container variant: an ordered child list and
/// padding applied around it. Insertion order is significant and preserved;
/// children are visited in list order for both measurement and layout
/// tie-breaks.
#[derive(Debug, Default)]
pub(crate) struct Group {
    /// Padding applied inside the container, around all children.
    pub padding: Insets,
    /// The owned children, in insertion order.
    pub children: Vec<View>,
}

impl Group {
    /// Insert a child at `index`, recording the owning container's id as the
    /// child's parent back-reference. Fails without mutating the list if the
    /// child already has a parent or the index is out of range.
    pub fn insert(&mut self, index: usize, mut child: View, parent_id: u64) -> Result<()> {
        if let Some(existing) = child.parent_id() {
            tracing::debug!(existing, "rejected insert of parented node");
            return Err(Error::Tree(
                "node is already a child of another container".into(),
            ));
        }
        if index > self.children.len() {
            return Err(Error::Tree(format!(
                "insert index {index} out of range ({} children)",
                self.children.len()
            )));
        }
        child.set_parent_id(Some(parent_id));
        self.children.insert(index, child);
        Ok(())
    }

    /// Remove and return the child at `index`. The detached subtree loses
    /// its measured sizes.
    pub fn remove(&mut self, index: usize) -> Result<View> {
        if index >= self.children.len() {
            return Err(Error::Tree(format!(
                "remove index {index} out of range ({} children)",
                self.children.len()
            )));
        }
        let mut child = self.children.remove(index);
        child.set_parent_id(None);
        child.invalidate();
        Ok(child)
    }

    /// Replace the entire child list, returning the previous children
    /// detached. Fails without mutating anything if any incoming child
    /// already has a parent.
    pub fn replace(&mut self, children: Vec<View>, parent_id: u64) -> Result<Vec<View>> {
        if children.iter().any(|c| c.parent_id().is_some()) {
            return Err(Error::Tree(
                "node is already a child of another container".into(),
            ));
        }
        let mut old = std::mem::replace(&mut self.children, children);
        for child in &mut old {
            child.set_parent_id(None);
            child.invalidate();
        }
        for child in &mut self.children {
            child.set_parent_id(Some(parent_id));
        }
        Ok(old)
    }

    /// Lay out every child into an empty rect, marking the subtree hidden.
    /// Invoked when the container itself is hidden; descendants still see
    /// the pass so they can react to the hidden state.
    pub fn hide_children(&mut self) -> Result<()> {
        for child in &mut self.children {
            child.layout(Rect::zero(), true)?;
        }
        Ok(())
    }

    /// Depth-first tag lookup across the children.
    pub fn find_by_tag(&self, tag: &str) -> Option<&View> {
        self.children.iter().find_map(|c| c.find_by_tag(tag))
    }

    /// Depth-first tag lookup across the children, mutably.
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut View> {
        self.children
            .iter_mut()
            .find_map(|c| c.find_by_tag_mut(tag))
    }
}
