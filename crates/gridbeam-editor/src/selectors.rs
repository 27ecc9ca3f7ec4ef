//! Derived read-only views over the part store
//!
//! All selectors are pure functions of the current state; nothing here is
//! cached or mutated in place.

use std::collections::HashMap;

use gridbeam_core::{BeamDimensions, Part, PartType, SpecCatalog, SpecId};
use uuid::Uuid;

use crate::store::PartsState;

/// Resolve the physical dimensions of one part through the spec catalog
pub fn part_dimensions(
    part: &Part,
    catalog: &SpecCatalog,
    spec_id: SpecId,
) -> Option<BeamDimensions> {
    catalog.dimensions(spec_id, part.size_id, part.material_id)
}

/// The currently selected parts
pub fn selected_parts<'a>(state: &'a PartsState) -> Vec<(Uuid, &'a Part)> {
    state
        .parts()
        .filter(|(uuid, _)| state.selected().contains(*uuid))
        .collect()
}

/// The currently hovered parts
pub fn hovered_parts<'a>(state: &'a PartsState) -> Vec<(Uuid, &'a Part)> {
    state
        .parts()
        .filter(|(uuid, _)| state.hovered().contains(*uuid))
        .collect()
}

/// Group all parts by type, for summary displays
pub fn parts_by_type<'a>(state: &'a PartsState) -> HashMap<PartType, Vec<&'a Part>> {
    let mut groups: HashMap<PartType, Vec<&Part>> = HashMap::new();
    for (_, part) in state.parts() {
        groups.entry(part.part_type).or_default().push(part);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbeam_core::{AxisDirection, Direction, GridPosition, MaterialId, SizeId};

    fn store() -> (PartsState, Vec<Uuid>) {
        let mut state = PartsState::new();
        let fastener = Part::new(
            PartType::Fastener,
            GridPosition::ZERO,
            Direction::Axis(AxisDirection::Z),
            1,
        );
        let uuids = state.set_parts(vec![
            Part::beam(GridPosition::ZERO, AxisDirection::X, 4),
            Part::beam(GridPosition::new(0, 0, 1), AxisDirection::Y, 6),
            fastener,
        ]);
        (state, uuids)
    }

    #[test]
    fn test_part_dimensions_join() {
        let part = Part {
            size_id: SizeId::OneAndHalfInch,
            material_id: MaterialId::Wood,
            ..Part::beam(GridPosition::ZERO, AxisDirection::X, 4)
        };
        let dims = part_dimensions(&part, &SpecCatalog, SpecId::Imperial).unwrap();
        assert_eq!(dims.beam_width, 0.0381);

        // A size missing from the active spec resolves to nothing
        assert!(part_dimensions(&part, &SpecCatalog, SpecId::Metric).is_none());
    }

    #[test]
    fn test_selected_subset() {
        let (mut state, uuids) = store();
        state.select(uuids[0]);
        state.select(uuids[2]);

        let selected = selected_parts(&state);
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().any(|(uuid, _)| *uuid == uuids[0]));
        assert!(hovered_parts(&state).is_empty());
    }

    #[test]
    fn test_parts_by_type() {
        let (state, _) = store();
        let groups = parts_by_type(&state);
        assert_eq!(groups[&PartType::Beam].len(), 2);
        assert_eq!(groups[&PartType::Fastener].len(), 1);
        assert!(!groups.contains_key(&PartType::Skin));
    }
}
