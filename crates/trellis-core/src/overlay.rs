//! Overlay containers: children overlap, each measured and positioned
//! independently within the container's bounds.

use geom::{Rect, SizeF};

use crate::{
    Result, container::Group, dimension::Unit, host::DisplayMetrics, params::LayoutParameters,
};

/// Measure an overlay. Children whose `ParentRatio` axes are resolvable
/// from the container's own resolved size are measured directly; the rest
/// are deferred and then re-measured against the max extent the direct
/// children established, or at natural size if nothing resolved.
pub(crate) fn measure(
    params: &LayoutParameters,
    group: &mut Group,
    env: &dyn DisplayMetrics,
    parent_width: Option<f32>,
    parent_height: Option<f32>,
) -> Result<SizeF> {
    let width = params.try_resolve_width(env, parent_width);
    let height = params.try_resolve_height(env, parent_height);

    // Room offered to children excludes our padding.
    let child_w = width.map(|v| v - group.padding.horizontal());
    let child_h = height.map(|v| v - group.padding.vertical());

    let mut deferred: Vec<usize> = Vec::new();
    let mut have_resolved = false;
    let mut max_w = 0.0f32;
    let mut max_h = 0.0f32;

    for (i, child) in group.children.iter_mut().enumerate() {
        if child.is_gone() {
            continue;
        }
        let margins = child.params().margins;

        let offer_w = if child.params().width.unit() == Unit::ParentRatio {
            match child_w {
                Some(v) => Some(v - margins.horizontal()),
                None => {
                    deferred.push(i);
                    continue;
                }
            }
        } else {
            None
        };
        let offer_h = if child.params().height.unit() == Unit::ParentRatio {
            match child_h {
                Some(v) => Some(v - margins.vertical()),
                None => {
                    deferred.push(i);
                    continue;
                }
            }
        } else {
            None
        };

        child.measure(env, offer_w, offer_h)?;
        let size = child.measured_size()?;
        max_w = max_w.max(size.w + margins.horizontal());
        max_h = max_h.max(size.h + margins.vertical());
        have_resolved = true;
    }

    for i in deferred {
        let child = &mut group.children[i];
        let margins = child.params().margins;
        let offer_w = (child.params().width.unit() == Unit::ParentRatio && have_resolved)
            .then(|| max_w - margins.horizontal());
        let offer_h = (child.params().height.unit() == Unit::ParentRatio && have_resolved)
            .then(|| max_h - margins.vertical());
        child.measure(env, offer_w, offer_h)?;
    }

    // Unresolved axes wrap the children.
    let mut content = SizeF::zero();
    if width.is_none() || height.is_none() {
        for child in &group.children {
            if child.is_gone() {
                continue;
            }
            let size = child.measured_size()?;
            let margins = child.params().margins;
            content.w = content.w.max(size.w + margins.horizontal());
            content.h = content.h.max(size.h + margins.vertical());
        }
        content.w += group.padding.horizontal();
        content.h += group.padding.vertical();
    }

    Ok(params.resolve_size(width, height, content))
}

/// Position an overlay's children within `frame`: each visible child is
/// independently margin-inset and gravity-aligned inside the padded bounds.
/// Children are not coordinated with each other; overlap is expected.
pub(crate) fn arrange(group: &mut Group, frame: Rect) -> Result<()> {
    let bounds = Rect::at_origin(frame.size()).inset(group.padding);
    for child in &mut group.children {
        let rect = child.measured_frame(bounds)?;
        child.layout(rect, false)?;
    }
    Ok(())
}
