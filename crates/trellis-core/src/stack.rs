//! Stack containers: children arranged in a single row or column, with
//! leftover main-axis space distributed by weight.

use geom::{Gravity, HGravity, Insets, Rect, SizeF, VGravity};

use crate::{
    Result,
    container::Group,
    dimension::{Dimension, Unit},
    host::DisplayMetrics,
    params::LayoutParameters,
};

/// The axis along which a stack arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Children form a row; the main axis is horizontal.
    Horizontal,
    /// Children form a column; the main axis is vertical.
    Vertical,
}

/// Alignment along one axis, after gravity has been split into main and
/// cross components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Start,
    Center,
    End,
}

impl From<HGravity> for Align {
    fn from(g: HGravity) -> Self {
        match g {
            HGravity::Left => Self::Start,
            HGravity::Center => Self::Center,
            HGravity::Right => Self::End,
        }
    }
}

impl From<VGravity> for Align {
    fn from(g: VGravity) -> Self {
        match g {
            VGravity::Top => Self::Start,
            VGravity::Center => Self::Center,
            VGravity::Bottom => Self::End,
        }
    }
}

impl Orientation {
    fn main(self, s: SizeF) -> f32 {
        match self {
            Self::Horizontal => s.w,
            Self::Vertical => s.h,
        }
    }

    fn cross(self, s: SizeF) -> f32 {
        match self {
            Self::Horizontal => s.h,
            Self::Vertical => s.w,
        }
    }

    /// Total insets along the main axis.
    fn insets_main(self, i: &Insets) -> f32 {
        match self {
            Self::Horizontal => i.horizontal(),
            Self::Vertical => i.vertical(),
        }
    }

    /// Total insets across the main axis.
    fn insets_cross(self, i: &Insets) -> f32 {
        match self {
            Self::Horizontal => i.vertical(),
            Self::Vertical => i.horizontal(),
        }
    }

    fn leading_main(self, i: &Insets) -> f32 {
        match self {
            Self::Horizontal => i.left,
            Self::Vertical => i.top,
        }
    }

    fn trailing_main(self, i: &Insets) -> f32 {
        match self {
            Self::Horizontal => i.right,
            Self::Vertical => i.bottom,
        }
    }

    fn leading_cross(self, i: &Insets) -> f32 {
        match self {
            Self::Horizontal => i.top,
            Self::Vertical => i.left,
        }
    }

    fn trailing_cross(self, i: &Insets) -> f32 {
        match self {
            Self::Horizontal => i.bottom,
            Self::Vertical => i.right,
        }
    }

    /// Map (main, cross) availability back to (width, height).
    fn pack(self, main: Option<f32>, cross: Option<f32>) -> (Option<f32>, Option<f32>) {
        match self {
            Self::Horizontal => (main, cross),
            Self::Vertical => (cross, main),
        }
    }

    fn main_dimension(self, lp: &LayoutParameters) -> Dimension {
        match self {
            Self::Horizontal => lp.width,
            Self::Vertical => lp.height,
        }
    }

    fn cross_dimension(self, lp: &LayoutParameters) -> Dimension {
        match self {
            Self::Horizontal => lp.height,
            Self::Vertical => lp.width,
        }
    }

    fn main_align(self, g: Gravity) -> Align {
        match self {
            Self::Horizontal => g.horizontal.into(),
            Self::Vertical => g.vertical.into(),
        }
    }

    fn cross_align(self, g: Gravity) -> Align {
        match self {
            Self::Horizontal => g.vertical.into(),
            Self::Vertical => g.horizontal.into(),
        }
    }

    fn child_rect(self, main_pos: f32, cross_pos: f32, size: SizeF) -> Rect {
        match self {
            Self::Horizontal => Rect::new(main_pos, cross_pos, size.w, size.h),
            Self::Vertical => Rect::new(cross_pos, main_pos, size.w, size.h),
        }
    }
}

/// Configuration specific to a stack container.
#[derive(Debug)]
pub(crate) struct StackOptions {
    /// Stacking axis.
    pub orientation: Orientation,
    /// Gap inserted between consecutive visible children only.
    pub spacing: f32,
    /// Explicit total weight for leftover-space distribution; zero computes
    /// it from the visible `ParentRatio` children.
    pub total_weight: u32,
}

impl StackOptions {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            spacing: 0.0,
            total_weight: 0,
        }
    }
}

/// Whether a child takes a weighted share of leftover space on the main
/// axis.
fn is_weighted(o: Orientation, lp: &LayoutParameters) -> bool {
    o.main_dimension(lp).unit() == Unit::ParentRatio
}

/// Measure a stack. Children with a fixed main axis are measured first at
/// their natural main extent and accumulated into the fixed total; the
/// remaining room is then handed out to `ParentRatio` children in child
/// order, shrinking the pool by each child's actual measured size as it
/// goes, so a child that refuses its offer (min/max clamps) changes the
/// distribution for subsequent siblings.
pub(crate) fn measure(
    params: &LayoutParameters,
    opts: &StackOptions,
    group: &mut Group,
    env: &dyn DisplayMetrics,
    parent_width: Option<f32>,
    parent_height: Option<f32>,
) -> Result<SizeF> {
    let o = opts.orientation;
    let width = params.try_resolve_width(env, parent_width);
    let height = params.try_resolve_height(env, parent_height);
    let (main, cross) = match o {
        Orientation::Horizontal => (width, height),
        Orientation::Vertical => (height, width),
    };

    // Cross-axis room offered to children excludes our padding; our own
    // measured size keeps the full resolved extent.
    let cross_avail = cross.map(|v| v - o.insets_cross(&group.padding));

    // Fixed pass: everything that doesn't take a weighted share. Margins of
    // weighted children count as fixed space too.
    let mut total_fixed = 0.0;
    let mut visible = 0usize;
    for child in &mut group.children {
        if child.is_gone() {
            continue;
        }
        let margins = child.params().margins;
        if !is_weighted(o, child.params()) {
            let offer_cross = cross_avail.map(|v| v - o.insets_cross(&margins));
            let (w, h) = o.pack(None, offer_cross);
            child.measure(env, w, h)?;
            total_fixed += o.main(child.measured_size()?);
        }
        total_fixed += o.insets_main(&margins);
        visible += 1;
    }
    total_fixed += o.insets_main(&group.padding);
    if visible > 1 {
        total_fixed += (visible - 1) as f32 * opts.spacing;
    }

    // Weighted pass.
    let mut total_variable = 0.0;
    if let Some(main_avail) = main {
        let mut total_weight = if opts.total_weight != 0 {
            opts.total_weight
        } else {
            group
                .children
                .iter()
                .filter(|c| !c.is_gone() && is_weighted(o, c.params()))
                .map(|c| c.params().weight)
                .sum()
        };
        let mut room = main_avail - total_fixed;
        for child in &mut group.children {
            if child.is_gone() || !is_weighted(o, child.params()) {
                continue;
            }
            if room < 0.0 {
                room = 0.0;
            }
            let weight = child.params().weight;
            let share = if total_weight == 0 {
                room
            } else {
                room * weight as f32 / total_weight as f32
            };
            let margins = child.params().margins;
            let offer_cross = cross_avail.map(|v| v - o.insets_cross(&margins));
            let (w, h) = o.pack(Some(share), offer_cross);
            child.measure(env, w, h)?;
            let taken = o.main(child.measured_size()?);
            total_variable += taken;
            room -= taken;
            total_weight = total_weight.saturating_sub(weight);
        }
    } else {
        // Our own main axis is content-driven, so there is no leftover space
        // to share: measure weighted children at their natural main extent.
        for child in &mut group.children {
            if child.is_gone() || !is_weighted(o, child.params()) {
                continue;
            }
            let margins = child.params().margins;
            let offer_cross = cross_avail.map(|v| v - o.insets_cross(&margins));
            let (w, h) = o.pack(None, offer_cross);
            child.measure(env, w, h)?;
            total_variable += o.main(child.measured_size()?);
        }
    }

    // Cross-axis wrap: the widest non-ParentRatio child wins, and
    // ParentRatio-cross children are then re-measured pinned to that extent.
    let mut content = SizeF::zero();
    if cross.is_none() {
        let mut max_cross = 0.0f32;
        for child in &group.children {
            if child.is_gone() || o.cross_dimension(child.params()).unit() == Unit::ParentRatio {
                continue;
            }
            let extent =
                o.cross(child.measured_size()?) + o.insets_cross(&child.params().margins);
            max_cross = max_cross.max(extent);
        }
        for child in &mut group.children {
            if child.is_gone() || o.cross_dimension(child.params()).unit() != Unit::ParentRatio {
                continue;
            }
            let measured_main = o.main(child.measured_size()?);
            let (w, h) = o.pack(Some(measured_main), Some(max_cross));
            child.measure(env, w, h)?;
        }
        let wrapped = max_cross + o.insets_cross(&group.padding);
        content = match o {
            Orientation::Horizontal => SizeF::new(0.0, wrapped),
            Orientation::Vertical => SizeF::new(wrapped, 0.0),
        };
    }

    let main_final = main.unwrap_or(total_fixed + total_variable);
    let (w, h) = o.pack(Some(main_final), cross);
    Ok(params.resolve_size(w, h, content))
}

/// Total measured extent of the stack along the main axis: children,
/// margins, spacing and padding.
fn total_main(o: Orientation, spacing: f32, group: &Group) -> Result<f32> {
    let mut total = o.insets_main(&group.padding);
    let mut visible = 0usize;
    for child in &group.children {
        if child.is_gone() {
            continue;
        }
        total += o.main(child.measured_size()?) + o.insets_main(&child.params().margins);
        visible += 1;
    }
    if visible > 1 {
        total += (visible - 1) as f32 * spacing;
    }
    Ok(total)
}

/// Position a stack's children within `frame` using the sizes computed
/// during measurement. Child frames are in the stack's coordinate space.
pub(crate) fn arrange(
    params: &LayoutParameters,
    opts: &StackOptions,
    group: &mut Group,
    frame: Rect,
) -> Result<()> {
    let o = opts.orientation;
    let base = Rect::at_origin(frame.size());
    let main_extent = o.main(base.size());
    let cross_extent = o.cross(base.size());

    // The whole stack shifts along the main axis by the container's own
    // gravity; Bottom/Right anchor its total extent at the far padding edge.
    let total = total_main(o, opts.spacing, group)?;
    let mut cursor = match o.main_align(params.gravity) {
        Align::Start => o.leading_main(&group.padding),
        Align::End => main_extent - total + o.leading_main(&group.padding),
        Align::Center => main_extent / 2.0 - total / 2.0 + o.leading_main(&group.padding),
    };

    let mut first = true;
    for child in &mut group.children {
        if child.is_gone() {
            child.layout(Rect::zero(), false)?;
            continue;
        }
        if !first {
            cursor += opts.spacing;
        }
        first = false;

        let margins = child.params().margins;
        cursor += o.leading_main(&margins);
        let size = child.measured_size()?;

        let cross_pos = match o.cross_align(child.params().gravity) {
            Align::Start => o.leading_cross(&group.padding) + o.leading_cross(&margins),
            Align::End => {
                cross_extent
                    - o.trailing_cross(&group.padding)
                    - o.trailing_cross(&margins)
                    - o.cross(size)
            }
            Align::Center => cross_extent / 2.0 - (o.cross(size) + o.insets_cross(&margins)) / 2.0,
        };

        child.layout(o.child_rect(cursor, cross_pos, size), false)?;
        cursor += o.main(size) + o.trailing_main(&margins);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Dimension, LayoutParameters, View,
        tutils::{TFixed, metrics},
    };

    #[test]
    fn axis_mapping() {
        let sz = SizeF::new(3.0, 7.0);
        assert_eq!(Orientation::Horizontal.main(sz), 3.0);
        assert_eq!(Orientation::Horizontal.cross(sz), 7.0);
        assert_eq!(Orientation::Vertical.main(sz), 7.0);
        assert_eq!(Orientation::Vertical.pack(Some(1.0), None), (None, Some(1.0)));
    }

    #[test]
    fn weight_partition() -> Result<()> {
        // H=300, two ParentRatio children with weights 1 and 2, no fixed
        // children, no padding or spacing.
        let mut stack = View::stack(Orientation::Vertical);
        for weight in [1, 2] {
            let (child, _) = TFixed::view(10.0, 10.0);
            stack.add_child(child.with_params(
                LayoutParameters::new(Dimension::absolute(10.0), Dimension::fill_parent())
                    .with_weight(weight),
            ))?;
        }
        stack.measure(&metrics(), Some(100.0), Some(300.0))?;
        assert_eq!(
            stack.children()[0].measured_size()?,
            SizeF::new(10.0, 100.0)
        );
        assert_eq!(
            stack.children()[1].measured_size()?,
            SizeF::new(10.0, 200.0)
        );
        Ok(())
    }

    #[test]
    fn clamped_child_shifts_the_remaining_room() -> Result<()> {
        // Three equal weights over 300 units; the first child caps itself at
        // 50, so the later siblings split the freed room: 125 each.
        let mut stack = View::stack(Orientation::Vertical);
        for max in [Some(50.0), None, None] {
            let (child, _) = TFixed::view(10.0, 10.0);
            stack.add_child(child.with_params(
                LayoutParameters::new(Dimension::absolute(10.0), Dimension::fill_parent())
                    .with_height_clamp(None, max),
            ))?;
        }
        stack.measure(&metrics(), Some(100.0), Some(300.0))?;
        let heights: Vec<f32> = stack
            .children()
            .iter()
            .map(|c| c.measured_size().map(|s| s.h))
            .collect::<Result<_>>()?;
        assert_eq!(heights, vec![50.0, 125.0, 125.0]);
        Ok(())
    }

    #[test]
    fn zero_total_weight_grants_all_room_to_the_first_taker() -> Result<()> {
        let mut stack = View::stack(Orientation::Vertical);
        for _ in 0..2 {
            let (child, _) = TFixed::view(10.0, 10.0);
            stack.add_child(child.with_params(
                LayoutParameters::new(Dimension::absolute(10.0), Dimension::fill_parent())
                    .with_weight(0),
            ))?;
        }
        stack.measure(&metrics(), Some(100.0), Some(300.0))?;
        assert_eq!(stack.children()[0].measured_size()?.h, 300.0);
        assert_eq!(stack.children()[1].measured_size()?.h, 0.0);
        Ok(())
    }

    #[test]
    fn negative_room_floors_at_zero() -> Result<()> {
        let mut stack = View::stack(Orientation::Vertical);
        let (fixed, _) = TFixed::view(10.0, 400.0);
        stack.add_child(fixed.with_params(LayoutParameters::new(
            Dimension::absolute(10.0),
            Dimension::absolute(400.0),
        )))?;
        let (weighted, _) = TFixed::view(10.0, 10.0);
        stack.add_child(weighted.with_params(LayoutParameters::new(
            Dimension::absolute(10.0),
            Dimension::fill_parent(),
        )))?;
        stack.measure(&metrics(), Some(100.0), Some(300.0))?;
        assert_eq!(stack.children()[1].measured_size()?.h, 0.0);
        Ok(())
    }

    #[test]
    fn content_driven_main_uses_natural_sizes() -> Result<()> {
        // A wrap-content column with a fill-parent child: no room to share,
        // so the child is measured at its natural height.
        let mut stack = View::stack(Orientation::Vertical).with_params(
            LayoutParameters::new(Dimension::wrap_content(), Dimension::wrap_content()),
        );
        let (a, _) = TFixed::view(30.0, 20.0);
        stack.add_child(a)?;
        let (b, _) = TFixed::view(40.0, 25.0);
        stack.add_child(b.with_params(LayoutParameters::new(
            Dimension::wrap_content(),
            Dimension::fill_parent(),
        )))?;
        stack.measure(&metrics(), Some(100.0), None)?;
        assert_eq!(stack.measured_size()?, SizeF::new(40.0, 45.0));
        Ok(())
    }

    #[test]
    fn cross_wrap_pins_fill_parent_children() -> Result<()> {
        let mut stack = View::stack(Orientation::Vertical).with_params(
            LayoutParameters::new(Dimension::wrap_content(), Dimension::absolute(100.0)),
        );
        let (wide, _) = TFixed::view(60.0, 10.0);
        stack.add_child(wide)?;
        let (filler, _) = TFixed::view(5.0, 10.0);
        stack.add_child(filler.with_params(LayoutParameters::new(
            Dimension::fill_parent(),
            Dimension::absolute(10.0),
        )))?;
        stack.measure(&metrics(), None, Some(100.0))?;
        // The fill-parent child stretches to the widest sibling.
        assert_eq!(stack.children()[1].measured_size()?.w, 60.0);
        assert_eq!(stack.measured_size()?.w, 60.0);
        Ok(())
    }

    #[test]
    fn spacing_counts_visible_children_only() -> Result<()> {
        let mut stack = View::stack(Orientation::Vertical).with_params(
            LayoutParameters::new(Dimension::wrap_content(), Dimension::wrap_content()),
        );
        stack.set_spacing(10.0)?;
        for _ in 0..3 {
            let (child, _) = TFixed::view(10.0, 20.0);
            stack.add_child(child)?;
        }
        stack.children_mut()[1].set_visibility(crate::Visibility::Gone);
        stack.measure(&metrics(), Some(100.0), None)?;
        // Two visible children, one gap.
        assert_eq!(stack.measured_size()?.h, 50.0);
        Ok(())
    }
}
