use super::*;

fn param(name: &str, mutable: bool, ephemeral: bool) -> TemplateVersionParameter {
    TemplateVersionParameter {
        name: name.to_owned(),
        mutable,
        ephemeral,
        ..Default::default()
    }
}

fn names(items: &[IndexedParameter]) -> Vec<&str> {
    items.iter().map(|p| p.parameter.name.as_str()).collect()
}

// =============================================================
// section_for
// =============================================================

#[test]
fn section_for_covers_all_flag_combinations() {
    assert_eq!(section_for(&param("a", true, false)), Section::Parameters);
    assert_eq!(section_for(&param("b", true, true)), Section::Ephemeral);
    assert_eq!(section_for(&param("c", false, false)), Section::Immutable);
    assert_eq!(section_for(&param("d", false, true)), Section::Immutable);
}

#[test]
fn predicates_agree_with_section_for() {
    for (mutable, ephemeral) in [(true, false), (true, true), (false, false), (false, true)] {
        let p = param("x", mutable, ephemeral);
        let hits = [is_persistent_mutable(&p), is_ephemeral_mutable(&p), is_immutable(&p)];
        assert_eq!(hits.iter().filter(|hit| **hit).count(), 1);
        let accepted: Vec<Section> = Section::ALL.into_iter().filter(|s| s.accepts(&p)).collect();
        assert_eq!(accepted, vec![section_for(&p)]);
    }
}

#[test]
fn section_accepts_uses_its_predicate() {
    let ephemeral = param("reset", true, true);
    assert!(Section::Ephemeral.accepts(&ephemeral));
    assert!(!Section::Parameters.accepts(&ephemeral));
    assert!(!Section::Immutable.accepts(&ephemeral));
}

#[test]
fn only_immutable_section_is_read_only() {
    assert!(Section::Parameters.is_editable());
    assert!(Section::Ephemeral.is_editable());
    assert!(!Section::Immutable.is_editable());
}

// =============================================================
// partition
// =============================================================

#[test]
fn partition_example_yields_one_input_per_section() {
    let defs = vec![param("region", true, false), param("reset_db", true, true), param("cpu", false, false)];
    let parts = partition(&defs);

    let visible: Vec<_> = parts.visible_sections().map(|(s, items)| (s.title(), names(items))).collect();
    assert_eq!(
        visible,
        vec![
            ("Parameters", vec!["region"]),
            ("Ephemeral Parameters", vec!["reset_db"]),
            ("Immutable parameters", vec!["cpu"]),
        ]
    );
}

#[test]
fn partition_preserves_original_indexes() {
    let defs = vec![
        param("cpu", false, false),
        param("region", true, false),
        param("reset_db", true, true),
        param("memory", true, false),
    ];
    let parts = partition(&defs);
    let indexes: Vec<usize> = parts.parameters.iter().map(|p| p.index).collect();
    assert_eq!(indexes, vec![1, 3]);
    assert_eq!(parts.ephemeral[0].index, 2);
    assert_eq!(parts.immutable[0].index, 0);
}

#[test]
fn partition_is_exhaustive_and_disjoint() {
    let defs: Vec<_> = (0..12)
        .map(|i| param(&format!("p{i}"), i % 3 != 0, i % 2 == 0))
        .collect();
    let parts = partition(&defs);
    assert_eq!(parts.len(), defs.len());

    let mut seen: Vec<usize> = Section::ALL
        .into_iter()
        .flat_map(|s| parts.section(s).iter().map(|p| p.index))
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..defs.len()).collect::<Vec<_>>());
}

#[test]
fn empty_sections_are_not_visible() {
    let parts = partition(&[param("region", true, false), param("zone", true, false)]);
    let visible: Vec<Section> = parts.visible_sections().map(|(s, _)| s).collect();
    assert_eq!(visible, vec![Section::Parameters]);
}

#[test]
fn empty_definitions_render_no_sections() {
    let parts = partition(&[]);
    assert!(parts.is_empty());
    assert_eq!(parts.visible_sections().count(), 0);
}

#[test]
fn ephemeral_immutable_goes_to_immutable_only() {
    let parts = partition(&[param("seed", false, true)]);
    assert!(parts.ephemeral.is_empty());
    assert_eq!(names(&parts.immutable), vec!["seed"]);
}
