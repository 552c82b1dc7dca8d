/// Main-axis size of the panel after applying the sizing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedSize {
    /// Content not yet measured: let the panel size itself naturally.
    Intrinsic,
    Cells(u16),
}

impl ResolvedSize {
    pub fn cells(self) -> Option<u16> {
        match self {
            ResolvedSize::Intrinsic => None,
            ResolvedSize::Cells(n) => Some(n),
        }
    }
}

/// Resolve the panel's extent on the slide axis.
///
/// `full_size` wins over everything, then an explicit `fixed` size (taken
/// verbatim, not clamped), then measurement: unmeasured content (zero)
/// resolves to [`ResolvedSize::Intrinsic`], measured content is clamped so
/// the panel never exceeds the viewport.
pub fn resolve(
    viewport_extent: u16,
    content_size: u16,
    fixed: Option<u16>,
    full_size: bool,
) -> ResolvedSize {
    if full_size {
        return ResolvedSize::Cells(viewport_extent);
    }
    if let Some(fixed) = fixed {
        return ResolvedSize::Cells(fixed);
    }
    if content_size == 0 {
        return ResolvedSize::Intrinsic;
    }
    ResolvedSize::Cells(content_size.min(viewport_extent))
}
