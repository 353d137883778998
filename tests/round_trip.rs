use approx::assert_relative_eq;
use frame_model::prelude::*;
use tempfile::tempdir;

fn assert_coords_eq(actual: [f64; 3], expected: [f64; 3]) {
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(*a, e, epsilon = 1e-9, max_relative = 1e-3);
    }
}

fn column_model() -> FrameModel {
    let mut model = FrameModel::new();
    model.add_node(1, Node::new(0.0, 0.0, 0.0));
    model.add_node(2, Node::new(0.0, 0.0, 10.0));
    model.add_frame_section(1, FrameSection::steel(2e5, 8e4, 0.3, 0.3));
    model.add_element(1, Element::frame(1, 2, 1));
    model
}

/// Two storey, one bay frame with a brace, an infill wall, masses and supports
fn braced_wall_frame() -> FrameModel {
    let mut model = FrameModel::new();
    model.add_node_grid([0.0; 3], [6.0, 1.0, 3.0], [2, 1, 3]);
    // 1..=3 on the left line, 4..=6 on the right line
    model.apply_fixity(&TagPattern::new(1, [2, 1, 1], [3, 0, 0]), Fixity::fixed());
    model.apply_mass(&TagPattern::new(2, [2, 2, 1], [3, 1, 0]), 12.5);

    model.add_frame_section(1, FrameSection::steel(2e5, 8e4, 0.3, 0.3));
    model.add_frame_section(2, FrameSection::wood(1.1e4, 6.9e2, 0.1, 0.2));
    model.add_wall_section(
        1,
        WallSection::from_rows([
            [0.15, 2.4, 2.4, 0.0, 0.0, 0.0],
            [1.0e3, 2.0e3, 2.5e3, 0.002, 0.01, 0.03],
            [0.8e3, 1.6e3, 2.0e3, 0.002, 0.01, 0.03],
        ]),
    );

    // columns 1..=4, beams 5..=6
    model.add_element_pattern(
        &Element::frame(0, 0, 1),
        &TagPattern::new(1, [2, 2, 1], [3, 1, 0]),
        &TagPattern::new(2, [2, 2, 1], [3, 1, 0]),
    );
    model.add_element_pattern(
        &Element::frame(0, 0, 1),
        &TagPattern::new(2, [2, 1, 1], [1, 0, 0]),
        &TagPattern::new(5, [2, 1, 1], [1, 0, 0]),
    );
    model.add_element(7, Element::brace(1, 5, 2));
    model.add_element(8, Element::wall(2, 6, 1, 2));

    model.change_damping(2.0);
    model.change_scale(9.81);
    model.change_accelerogram(Direction::X, "records/elcentro_x.txt");
    model.change_relative_tolerance(Tolerance::new(1e-4, 1e-4, 1e-5));
    model
}

#[test]
fn test_column_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("column.txt");

    column_model().save_model(&path).unwrap();
    let loaded = FrameModel::from_file(&path).unwrap();

    assert_eq!(loaded.tags(EntityKind::Node), vec![1, 2]);
    assert_coords_eq(loaded.get_node(1).unwrap().coords(), [0.0, 0.0, 0.0]);
    assert_coords_eq(loaded.get_node(2).unwrap().coords(), [0.0, 0.0, 10.0]);

    let section = loaded.get_frame_section(1).unwrap();
    assert_eq!(section.material, MaterialKind::Steel);
    assert_relative_eq!(section.e(), 2e5);
    assert_relative_eq!(section.g(), 8e4);
    assert_relative_eq!(section.width(), 0.3);
    assert_relative_eq!(section.height(), 0.3);

    let element = loaded.get_element(1).unwrap();
    assert_eq!(element.kind, ElementKind::Frame);
    assert_eq!(element.nodes, [1, 2]);
    assert_eq!(element.section, 1);
}

#[test]
fn test_full_model_round_trip() {
    let mut original = braced_wall_frame();
    let text = original.to_text().unwrap();

    let mut loaded = FrameModel::new();
    loaded.read_from(text.as_bytes()).unwrap();

    assert_eq!(loaded.summary(), original.summary());
    assert_eq!(loaded.tags(EntityKind::Element), (1..=8).collect::<Vec<_>>());

    for (tag, node) in original.nodes() {
        let copy = loaded.get_node(tag).unwrap();
        assert_coords_eq(copy.coords(), node.coords());
        assert_eq!(copy.fixity, node.fixity);
        assert_relative_eq!(copy.mass, node.mass);
    }

    // elements come back grouped frame, brace, wall under fresh tags
    let kinds: Vec<ElementKind> = loaded.elements().map(|(_, element)| element.kind).collect();
    assert_eq!(&kinds[6..], &[ElementKind::Brace, ElementKind::Wall]);
    assert_eq!(loaded.get_element(7).unwrap().nodes, [1, 5]);
    assert_eq!(loaded.get_element(7).unwrap().section, 2);
    let wall = loaded.get_element(8).unwrap();
    assert_eq!(wall.nodes, [2, 6]);
    assert_eq!(wall.orientation, 2);

    assert_eq!(loaded.get_frame_section(2).unwrap().material, MaterialKind::Wood);
    let wall_section = loaded.get_wall_section(1).unwrap();
    for (a, e) in wall_section
        .parameters
        .iter()
        .zip(original.get_wall_section(1).unwrap().parameters)
    {
        assert_relative_eq!(*a, e, max_relative = 1e-3);
    }

    let settings = &loaded.settings;
    assert_relative_eq!(settings.damping_ratio(), 2.0);
    assert_relative_eq!(settings.scale_factor(), 9.81);
    assert_eq!(settings.accelerogram(Direction::X), Some("records/elcentro_x.txt"));
    assert_eq!(settings.accelerogram(Direction::Y), None);
    assert_relative_eq!(settings.relative_tolerance.displacement, 1e-5);
}

#[test]
fn test_save_of_loaded_model_is_stable() {
    let mut model = braced_wall_frame();
    model.split_element(5, 3);

    // element tags are reassigned on the first load, so compare from there
    let mut loaded = FrameModel::new();
    loaded.read_from(model.to_text().unwrap().as_bytes()).unwrap();
    let first = loaded.to_text().unwrap();

    let mut reloaded = FrameModel::new();
    reloaded.read_from(first.as_bytes()).unwrap();
    let second = reloaded.to_text().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_save_compacts_tags() {
    let mut model = FrameModel::new();
    model.add_node(5, Node::new(0.0, 0.0, 0.0));
    model.add_node(2, Node::new(1.0, 0.0, 0.0));
    model.add_node(9, Node::new(2.0, 0.0, 0.0).with_fixity(Fixity::pinned()));
    model.add_frame_section(4, FrameSection::steel(2e5, 8e4, 0.3, 0.3));
    model.add_element(10, Element::frame(5, 9, 4));

    let dir = tempdir().unwrap();
    let path = dir.path().join("compacted.txt");
    model.save_model(&path).unwrap();

    // the in-memory model is compacted as well
    assert_eq!(model.tags(EntityKind::Node), vec![1, 2, 3]);
    assert_eq!(model.get_element(10).unwrap().nodes, [2, 3]);
    assert_eq!(model.get_element(10).unwrap().section, 1);

    let loaded = FrameModel::from_file(&path).unwrap();
    assert_coords_eq(loaded.get_node(1).unwrap().coords(), [1.0, 0.0, 0.0]);
    assert_eq!(loaded.get_element(1).unwrap().nodes, [2, 3]);
    assert_eq!(loaded.get_node(3).unwrap().fixity, Fixity::pinned());
}

#[test]
fn test_boundary_condition_ranks() {
    let mut model = column_model();
    model.change_fixity(1, Fixity::with_restraints(false, true, false, false, false, true));
    let text = model.to_text().unwrap();

    assert!(text.lines().any(|line| line == "1 1 2 0 0 1 0 0 0 2"));
    // base shear count followed by its node list
    let lines: Vec<&str> = text.lines().collect();
    let count = lines
        .iter()
        .position(|line| line.starts_with("1 ! NUMBER OF NODES USED FOR CALCULATING BASE SHEAR"))
        .unwrap();
    assert_eq!(lines[count + 1], "1");
}

#[test]
fn test_unsupported_model_round_trip() {
    let mut model = column_model();
    let text = model.to_text().unwrap();
    assert!(text.contains("0 ! NUMBER OF NODES USED FOR CALCULATING BASE SHEAR"));

    let mut loaded = FrameModel::new();
    loaded.read_from(text.as_bytes()).unwrap();
    assert_eq!(loaded.summary().supported_nodes, 0);
    assert_relative_eq!(loaded.settings.absolute_tolerance.force, 1e-3);
}

#[test]
fn test_json_snapshot() {
    let mut model = braced_wall_frame();
    model.highlight(EntityKind::Node, 1, true);
    let json = model.to_json().unwrap();

    let restored = FrameModel::from_json(&json).unwrap();
    assert!(!restored.get_node(1).unwrap().highlighted);
    assert_eq!(restored.summary(), model.summary());
    assert_eq!(restored.tags(EntityKind::Element), model.tags(EntityKind::Element));
    assert_eq!(restored.get_element(8).unwrap(), model.get_element(8).unwrap());
    assert_eq!(
        restored.settings.accelerogram(Direction::X),
        Some("records/elcentro_x.txt")
    );
}
