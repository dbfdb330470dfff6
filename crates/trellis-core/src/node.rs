//! The view tree: an abstract node, its cached measurement state, and the
//! closed set of node variants.

use std::sync::atomic::{AtomicU64, Ordering};

use geom::{Insets, Rect, SizeF};

use crate::{
    Error, Result,
    container::Group,
    host::DisplayMetrics,
    leaf,
    leaf::Widget,
    overlay,
    params::{LayoutParameters, Visibility},
    stack,
    stack::{Orientation, StackOptions},
};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Bookkeeping every node carries: a unique id, a non-owning back-reference
/// to the owning container, a cached measured size and an optional lookup
/// tag. The measured size is valid only between a `measure` call and the
/// next mutation.
#[derive(Debug)]
struct NodeState {
    id: u64,
    parent: Option<u64>,
    measured: Option<SizeF>,
    tag: Option<String>,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            parent: None,
            measured: None,
            tag: None,
        }
    }
}

/// The closed set of node variants. Leaves delegate to an external widget;
/// the two container variants own child lists and position them.
#[derive(Debug)]
enum Content {
    /// A wrapped native widget.
    Leaf(Box<dyn Widget>),
    /// Children arranged in a single row or column.
    Stack { opts: StackOptions, group: Group },
    /// Children overlapped, each positioned independently.
    Overlay { group: Group },
}

/// A participant in the layout tree. A view owns its layout parameters and,
/// for container variants, its children; it is attached to at most one
/// parent at a time.
#[derive(Debug)]
pub struct View {
    state: NodeState,
    params: LayoutParameters,
    content: Content,
}

impl View {
    /// Wrap a native widget as a leaf node. Leaves default to wrapping their
    /// content on both axes.
    pub fn leaf(widget: impl Widget + 'static) -> Self {
        Self {
            state: NodeState::default(),
            params: LayoutParameters::default(),
            content: Content::Leaf(Box::new(widget)),
        }
    }

    /// Construct an empty stack container. Containers default to filling
    /// their parent on both axes.
    pub fn stack(orientation: Orientation) -> Self {
        Self {
            state: NodeState::default(),
            params: LayoutParameters::fill(),
            content: Content::Stack {
                opts: StackOptions::new(orientation),
                group: Group::default(),
            },
        }
    }

    /// Construct an empty overlay container. Containers default to filling
    /// their parent on both axes.
    pub fn overlay() -> Self {
        Self {
            state: NodeState::default(),
            params: LayoutParameters::fill(),
            content: Content::Overlay {
                group: Group::default(),
            },
        }
    }

    /// Replace the layout parameters.
    pub fn with_params(mut self, params: LayoutParameters) -> Self {
        self.params = params;
        self
    }

    /// Set the lookup tag.
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.state.tag = Some(tag.to_string());
        self
    }

    /// Apply a configuration closure and return the view. This is the plain
    /// builder form of an inline init hook: construct, configure, then
    /// insert into a parent.
    pub fn configured(mut self, f: impl FnOnce(&mut Self)) -> Self {
        f(&mut self);
        self
    }

    /// The node's unique id.
    pub fn id(&self) -> u64 {
        self.state.id
    }

    /// The node's lookup tag, if set.
    pub fn tag(&self) -> Option<&str> {
        self.state.tag.as_deref()
    }

    /// The id of the owning container, if attached.
    pub(crate) fn parent_id(&self) -> Option<u64> {
        self.state.parent
    }

    pub(crate) fn set_parent_id(&mut self, parent: Option<u64>) {
        self.state.parent = parent;
    }

    /// The node's layout parameters.
    pub fn params(&self) -> &LayoutParameters {
        &self.params
    }

    /// Mutable access to the layout parameters. Invalidates the cached
    /// measurement; the host must run a new cycle before geometry is read.
    pub fn params_mut(&mut self) -> &mut LayoutParameters {
        self.state.measured = None;
        &mut self.params
    }

    /// The node's visibility state.
    pub fn visibility(&self) -> Visibility {
        self.params.visibility
    }

    /// Change the visibility state. The caller must re-run a measure/layout
    /// cycle afterwards; the engine does not detect the change on its own.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.params_mut().visibility = visibility;
    }

    /// True if the node is excluded from measurement and rendering.
    pub fn is_gone(&self) -> bool {
        self.params.visibility == Visibility::Gone
    }

    /// The node's children. Empty for leaves.
    pub fn children(&self) -> &[View] {
        match &self.content {
            Content::Leaf(_) => &[],
            Content::Stack { group, .. } | Content::Overlay { group } => &group.children,
        }
    }

    /// Mutable access to the children, for in-place reconfiguration.
    /// Invalidates the cached measurement. Empty for leaves.
    pub fn children_mut(&mut self) -> &mut [View] {
        self.state.measured = None;
        match &mut self.content {
            Content::Leaf(_) => &mut [],
            Content::Stack { group, .. } | Content::Overlay { group } => &mut group.children,
        }
    }

    /// The wrapped widget, for leaves.
    pub fn widget(&self) -> Option<&dyn Widget> {
        match &self.content {
            Content::Leaf(w) => Some(w.as_ref()),
            _ => None,
        }
    }

    /// The wrapped widget, mutably, for leaves.
    pub fn widget_mut(&mut self) -> Option<&mut dyn Widget> {
        match &mut self.content {
            Content::Leaf(w) => Some(w.as_mut()),
            _ => None,
        }
    }

    fn group_mut(&mut self) -> Result<&mut Group> {
        match &mut self.content {
            Content::Leaf(_) => Err(Error::Tree("node is not a container".into())),
            Content::Stack { group, .. } | Content::Overlay { group } => Ok(group),
        }
    }

    /// Insert a child at `index`. Fails if this node is a leaf, the index is
    /// out of range, or the child is already attached elsewhere; on failure
    /// no child list is mutated.
    pub fn insert_child(&mut self, index: usize, child: View) -> Result<()> {
        let id = self.state.id;
        self.state.measured = None;
        self.group_mut()?.insert(index, child, id)
    }

    /// Append a child.
    pub fn add_child(&mut self, child: View) -> Result<()> {
        let index = self.children().len();
        self.insert_child(index, child)
    }

    /// Remove and return the child at `index`. The detached subtree loses
    /// its measured sizes.
    pub fn remove_child(&mut self, index: usize) -> Result<View> {
        self.state.measured = None;
        self.group_mut()?.remove(index)
    }

    /// Replace all children, returning the previous ones detached.
    pub fn replace_children(&mut self, children: Vec<View>) -> Result<Vec<View>> {
        let id = self.state.id;
        self.state.measured = None;
        self.group_mut()?.replace(children, id)
    }

    /// Append children from an iterator; builder form of [`View::add_child`].
    pub fn with_children(mut self, children: impl IntoIterator<Item = View>) -> Result<Self> {
        for child in children {
            self.add_child(child)?;
        }
        Ok(self)
    }

    /// Set the container's padding. Fails on leaves.
    pub fn set_padding(&mut self, padding: Insets) -> Result<()> {
        self.state.measured = None;
        self.group_mut()?.padding = padding;
        Ok(())
    }

    /// Set the gap between consecutive visible children of a stack. Fails on
    /// other variants.
    pub fn set_spacing(&mut self, spacing: f32) -> Result<()> {
        self.state.measured = None;
        match &mut self.content {
            Content::Stack { opts, .. } => {
                opts.spacing = spacing;
                Ok(())
            }
            _ => Err(Error::Tree("node is not a stack".into())),
        }
    }

    /// Explicitly set the total weight a stack distributes leftover space
    /// against; zero computes it from the children. Fails on other variants.
    pub fn set_total_weight(&mut self, total_weight: u32) -> Result<()> {
        self.state.measured = None;
        match &mut self.content {
            Content::Stack { opts, .. } => {
                opts.total_weight = total_weight;
                Ok(())
            }
            _ => Err(Error::Tree("node is not a stack".into())),
        }
    }

    /// Find a node by tag anywhere in this subtree.
    pub fn find_by_tag(&self, tag: &str) -> Option<&View> {
        if self.state.tag.as_deref() == Some(tag) {
            return Some(self);
        }
        match &self.content {
            Content::Leaf(_) => None,
            Content::Stack { group, .. } | Content::Overlay { group } => group.find_by_tag(tag),
        }
    }

    /// Find a node by tag anywhere in this subtree, mutably.
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut View> {
        if self.state.tag.as_deref() == Some(tag) {
            return Some(self);
        }
        match &mut self.content {
            Content::Leaf(_) => None,
            Content::Stack { group, .. } | Content::Overlay { group } => {
                group.find_by_tag_mut(tag)
            }
        }
    }

    /// Drop cached measurements across the whole subtree.
    pub(crate) fn invalidate(&mut self) {
        self.state.measured = None;
        if let Content::Stack { group, .. } | Content::Overlay { group } = &mut self.content {
            for child in &mut group.children {
                child.invalidate();
            }
        }
    }

    /// Record the node's measured size, applying the min/max clamps.
    fn set_measured(&mut self, size: SizeF) {
        self.state.measured = Some(self.params.clamp(size));
    }

    /// Measure this node against the parent's available size on each axis
    /// (`None` = unconstrained). Invalidates any previous measurement, runs
    /// the variant's sizing algorithm and records the result; children are
    /// always fully measured before the node's own final size is computed.
    pub fn measure(
        &mut self,
        env: &dyn DisplayMetrics,
        parent_width: Option<f32>,
        parent_height: Option<f32>,
    ) -> Result<()> {
        self.state.measured = None;
        let size = match &mut self.content {
            Content::Leaf(widget) => {
                leaf::measure(widget.as_mut(), &self.params, env, parent_width, parent_height)
            }
            Content::Stack { opts, group } => stack::measure(
                &self.params,
                opts,
                group,
                env,
                parent_width,
                parent_height,
            )?,
            Content::Overlay { group } => {
                overlay::measure(&self.params, group, env, parent_width, parent_height)?
            }
        };
        self.set_measured(size);
        Ok(())
    }

    /// The size recorded by the most recent `measure`. Reading it without a
    /// preceding, still-valid measurement is a contract violation.
    pub fn measured_size(&self) -> Result<SizeF> {
        self.state.measured.ok_or_else(|| {
            Error::Measure("measured size read before a valid measurement".into())
        })
    }

    /// The frame this node occupies within `within`, placing the measured
    /// size by the node's own margins and gravity. `Gone` nodes occupy the
    /// empty rect.
    pub fn measured_frame(&self, within: Rect) -> Result<Rect> {
        if self.is_gone() {
            return Ok(Rect::zero());
        }
        let size = self.measured_size()?;
        Ok(within
            .inset(self.params.margins)
            .apply_gravity(size, self.params.gravity))
    }

    /// Position this node at `frame` (in the parent's coordinate space)
    /// using the sizes computed by the most recent `measure`, then recurse
    /// into children. A node is hidden if `parent_hidden` is set or its own
    /// visibility is not `Visible`; a hidden node still recurses, laying its
    /// subtree out into empty rects so descendants can react.
    pub fn layout(&mut self, frame: Rect, parent_hidden: bool) -> Result<()> {
        let hidden = parent_hidden || self.params.visibility != Visibility::Visible;
        match &mut self.content {
            Content::Leaf(widget) => {
                widget.apply_frame(frame, hidden);
                Ok(())
            }
            Content::Stack { opts, group } => {
                if hidden {
                    return group.hide_children();
                }
                stack::arrange(&self.params, opts, group, frame)
            }
            Content::Overlay { group } => {
                if hidden {
                    return group.hide_children();
                }
                overlay::arrange(group, frame)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutils::{TFixed, metrics};

    #[test]
    fn measured_size_requires_measurement() -> Result<()> {
        let (view, _) = TFixed::view(10.0, 10.0);
        assert_eq!(
            view.measured_size(),
            Err(Error::Measure(
                "measured size read before a valid measurement".into()
            ))
        );
        Ok(())
    }

    #[test]
    fn mutation_invalidates_measurement() -> Result<()> {
        let (mut view, _) = TFixed::view(10.0, 10.0);
        view.measure(&metrics(), None, None)?;
        assert!(view.measured_size().is_ok());
        view.params_mut().weight = 2;
        assert!(view.measured_size().is_err());
        Ok(())
    }

    #[test]
    fn reparent_guard_leaves_lists_untouched() -> Result<()> {
        let mut a = View::stack(Orientation::Vertical);
        let mut b = View::stack(Orientation::Vertical);
        let (child, _) = TFixed::view(10.0, 10.0);
        a.add_child(child)?;

        // Simulate a node that is still attached elsewhere.
        let (mut stray, _) = TFixed::view(10.0, 10.0);
        stray.set_parent_id(Some(a.id()));

        let err = b.add_child(stray).unwrap_err();
        assert_eq!(
            err,
            Error::Tree("node is already a child of another container".into())
        );
        assert_eq!(a.children().len(), 1);
        assert!(b.children().is_empty());
        Ok(())
    }

    #[test]
    fn detach_clears_parent_and_measurement() -> Result<()> {
        let mut a = View::stack(Orientation::Vertical);
        let (child, _) = TFixed::view(10.0, 10.0);
        a.add_child(child)?;
        a.measure(&metrics(), Some(100.0), Some(100.0))?;

        let detached = a.remove_child(0)?;
        assert_eq!(detached.parent_id(), None);
        assert!(detached.measured_size().is_err());

        // A detached child may be attached again.
        let mut b = View::overlay();
        b.add_child(detached)?;
        assert_eq!(b.children().len(), 1);
        Ok(())
    }

    #[test]
    fn replace_children_detaches_old() -> Result<()> {
        let mut a = View::stack(Orientation::Vertical);
        let (c1, _) = TFixed::view(1.0, 1.0);
        let (c2, _) = TFixed::view(2.0, 2.0);
        a.add_child(c1)?;

        let old = a.replace_children(vec![c2])?;
        assert_eq!(old.len(), 1);
        assert_eq!(old[0].parent_id(), None);
        assert_eq!(a.children().len(), 1);
        Ok(())
    }

    #[test]
    fn leaf_rejects_children() {
        let (mut leaf, _) = TFixed::view(1.0, 1.0);
        let (child, _) = TFixed::view(1.0, 1.0);
        assert!(leaf.add_child(child).is_err());
        assert!(leaf.set_padding(Insets::uniform(1.0)).is_err());
        assert!(leaf.set_spacing(1.0).is_err());
    }

    #[test]
    fn find_by_tag_walks_the_tree() -> Result<()> {
        let (inner, _) = TFixed::view(1.0, 1.0);
        let mut stack = View::stack(Orientation::Horizontal);
        stack.add_child(inner.with_tag("needle"))?;
        let mut root = View::overlay().with_tag("root");
        root.add_child(stack)?;

        assert!(root.find_by_tag("root").is_some());
        assert!(root.find_by_tag("needle").is_some());
        assert!(root.find_by_tag("missing").is_none());

        root.find_by_tag_mut("needle")
            .expect("tagged child")
            .set_visibility(Visibility::Gone);
        assert!(root.find_by_tag("needle").expect("tagged child").is_gone());
        Ok(())
    }
}
