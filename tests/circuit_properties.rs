use genome_designer::ir::{Circuit, GateId, GateKind, MAX_LANES, MIN_LANES};
use proptest::prelude::*;

fn gate_kind() -> impl Strategy<Value = GateKind> {
    prop::sample::select(GateKind::ALL.to_vec())
}

fn placement_list() -> impl Strategy<Value = Vec<(GateKind, usize, usize)>> {
    prop::collection::vec((gate_kind(), 0..MAX_LANES, 0usize..32), 0..40)
}

fn build(lanes: usize, placements: &[(GateKind, usize, usize)]) -> Circuit {
    let mut circuit = Circuit::new(lanes);
    for &(kind, qubit, step) in placements {
        // Out-of-range lanes are rejected; the rest land.
        let _ = circuit.place_gate(kind, qubit, step);
    }
    circuit
}

proptest! {
    #[test]
    fn lane_count_is_clamped(requested in 0usize..64) {
        let mut circuit = Circuit::new(4);
        let applied = circuit.set_lane_count(requested);
        prop_assert_eq!(applied, requested.clamp(MIN_LANES, MAX_LANES));
        prop_assert_eq!(circuit.lanes(), applied);
    }

    #[test]
    fn shrinking_prunes_lanes(placements in placement_list(), lanes in 1usize..=MAX_LANES) {
        let mut circuit = build(MAX_LANES, &placements);
        let before = circuit.len();
        circuit.set_lane_count(lanes);
        prop_assert!(circuit.gates().iter().all(|g| g.qubit < lanes));
        let kept = placements.iter().filter(|(_, q, _)| *q < lanes).count();
        prop_assert_eq!(circuit.len(), kept);
        prop_assert!(circuit.len() <= before);
    }

    #[test]
    fn depth_is_max_step_plus_one(placements in placement_list()) {
        let circuit = build(MAX_LANES, &placements);
        let expected = placements.iter().map(|(_, _, s)| s + 1).max().unwrap_or(0);
        prop_assert_eq!(circuit.depth(), expected);
    }

    #[test]
    fn quick_add_steps_increase(placements in placement_list(), kinds in prop::collection::vec(gate_kind(), 1..10)) {
        let mut circuit = build(MAX_LANES, &placements);
        let mut last: Option<usize> = None;
        for kind in kinds {
            let gate = circuit.quick_add(kind);
            prop_assert_eq!(gate.qubit, 0);
            prop_assert_eq!(gate.control, None);
            if let Some(prev) = last {
                prop_assert!(gate.step > prev);
            }
            last = Some(gate.step);
        }
    }

    #[test]
    fn ids_are_unique(placements in placement_list(), quick in 0usize..5) {
        let mut circuit = build(MAX_LANES, &placements);
        for _ in 0..quick {
            circuit.quick_add(GateKind::PauliX);
        }
        let mut ids: Vec<_> = circuit.gates().iter().map(|g| g.id.clone()).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), circuit.len());
    }

    #[test]
    fn removing_unknown_id_changes_nothing(placements in placement_list(), n in 1000u32..2000) {
        let mut circuit = build(MAX_LANES, &placements);
        let before = circuit.clone();
        let unknown = GateId::from(format!("g{n}"));
        prop_assert!(circuit.remove_gate(&unknown).is_none());
        prop_assert_eq!(circuit, before);
    }

    #[test]
    fn export_has_one_statement_per_gate(placements in placement_list()) {
        let circuit = build(MAX_LANES, &placements);
        let text = circuit.export_to_text();
        // Header, qubit line, blank line, statements, closing brace.
        prop_assert_eq!(text.lines().count(), circuit.len() + 4);
        let closing = "}\n";
        prop_assert!(text.ends_with(closing));
    }
}
