use mesh2dm::mesh::{ElementKind, MaterialId, Mesh, Node, NodeString};
use mesh2dm::readers::{MeshReader, ParseOptions};
use mesh2dm::writer::MeshWriter;
use mesh2dm::{parse_element, parse_node, parse_node_string, Error, ErrorKind};

use rstest::{fixture, rstest};

const CHANNEL: &str = "./data/meshes/channel.2dm";

const MIXED: &str = "\
MESH2D # exported by hand
GM \"mixed\"
NUM_MATERIALS_PER_ELEM 2
ND 1 0.0 0.0 1.0
ND 2 1.0 0.0 1.0
ND 3 2.0 0.0 1.0
ND 4 0.0 1.0 1.0
ND 5 1.0 1.0 1.0
ND 6 2.0 1.0 1.0
ND 7 0.0 2.0 1.0
ND 8 1.0 2.0 1.0
ND 9 2.0 2.0 1.0
E9Q 1 1 3 9 7 2 6 8 4 5 1 0.125
E2L 2 1 2 3 4.5e1
E3L 3 7 8 9 2 7
NS 1 2 3 4 5 6 7 8 9 1 2 3
NS 4 5 -6 everything
";

#[fixture]
fn channel() -> Mesh {
    mesh2dm::read_2dm(CHANNEL).unwrap()
}

fn read_text(text: &str) -> anyhow::Result<Mesh> {
    let mut reader = MeshReader::new();
    reader.disable_progress();
    reader.parse_lines(text.as_bytes())
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("mesh2dm_{}_{name}", std::process::id()))
}

#[rstest]
fn channel_contents(channel: Mesh) {
    assert_eq!(channel.name.as_deref(), Some("channel"));
    assert_eq!(channel.materials_per_element, Some(1));
    assert_eq!(channel.num_nodes(), 12);
    assert_eq!(channel.num_elements(), 8);
    assert_eq!(channel.num_node_strings(), 2);
    assert!(!channel.zero_index);

    let counts = channel.element_counts();
    assert_eq!(counts[&ElementKind::E4Q], 4);
    assert_eq!(counts[&ElementKind::E3T], 4);

    assert_eq!(channel.extent(), Some([0.0, 15.0, 0.0, 3.0]));
    assert_eq!(channel.node(7).unwrap().z, 9.5);
    assert_eq!(channel.element(3).unwrap().nodes, vec![3, 4, 8]);
    assert_eq!(channel.element(8).unwrap().materials, vec![MaterialId::Int(2)]);

    assert_eq!(channel.node_string("Inflow").unwrap().nodes, vec![1, 5, 9]);
    assert_eq!(channel.node_string("Outflow").unwrap().nodes, vec![4, 8, 12]);
}

#[test]
fn mixed_contents() {
    let mesh = read_text(MIXED).unwrap();
    assert_eq!(mesh.name.as_deref(), Some("mixed"));
    assert_eq!(mesh.num_materials(), 2);

    let e9q = mesh.element(1).unwrap();
    assert_eq!(e9q.kind, ElementKind::E9Q);
    assert_eq!(e9q.materials, vec![MaterialId::Int(1), MaterialId::Float(0.125)]);
    assert_eq!(
        mesh.element(2).unwrap().materials,
        vec![MaterialId::Int(3), MaterialId::Float(45.0)]
    );

    let all = mesh.node_string("everything").unwrap();
    assert_eq!(all.num_nodes(), 15);
    assert_eq!(all.nodes[11..], [3, 4, 5, 6]);
}

#[rstest]
#[case(MeshWriter::default())]
#[case(MeshWriter { decimals: 17, fold: 0, ..Default::default() })]
#[case(MeshWriter { fold: 1, signature: Some("first\nsecond".into()), ..Default::default() })]
fn written_mesh_reads_back(#[case] writer: MeshWriter) {
    for mesh in [mesh2dm::read_2dm(CHANNEL).unwrap(), read_text(MIXED).unwrap()] {
        let content = writer.file_content(&mesh).unwrap();
        let reread = read_text(&content).unwrap();
        assert_eq!(reread, mesh);
    }
}

#[rstest]
fn file_round_trip(channel: Mesh) {
    let path = temp_path("round_trip.2dm");
    mesh2dm::write_2dm(&channel, &path).unwrap();
    let reread = mesh2dm::read_2dm(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(reread, channel);
}

#[test]
fn canonical_lines_read_back() {
    let mesh = read_text(MIXED).unwrap();

    for node in &mesh.nodes {
        assert_eq!(&parse_node(&node.to_line(), false).unwrap(), node);
    }

    for element in &mesh.elements {
        assert_eq!(&parse_element(&element.to_line(), false, true).unwrap(), element);
    }

    for node_string in &mesh.node_strings {
        let mut nodes = Vec::new();
        let status = parse_node_string(&node_string.to_line(), false, &mut nodes).unwrap();
        assert!(status.is_closed);
        assert_eq!(nodes, node_string.nodes);
        assert_eq!(Some(status.label), node_string.name);
    }
}

#[test]
fn awkward_values_read_back() {
    let node = Node {
        id: 1,
        x: 0.1 + 0.2,
        y: -1.0e-300,
        z: 123456789.0,
    };
    assert_eq!(parse_node(&node.to_line(), false).unwrap(), node);

    let node_string = NodeString {
        nodes: vec![2, 3],
        name: None,
    };
    let mut nodes = Vec::new();
    let status = parse_node_string(&node_string.to_line(), false, &mut nodes).unwrap();
    assert_eq!(status.label, "");
    assert_eq!(nodes, vec![2, 3]);
}

#[test]
fn missing_file() {
    let error = mesh2dm::read_2dm("./data/meshes/does_not_exist.2dm").unwrap_err();
    assert!(error.to_string().contains("Could not open"));
}

#[rstest]
#[case("ND 1 0 0 0\n", "not a 2DM mesh file")]
#[case("\n# nothing here\n", "MESH2D tag not found")]
#[case("MESH2D\nND 1 0 0 0\nND 2 0 0 0\nND 4 0 0 0\n", "Node IDs have holes")]
#[case("MESH2D\nND 1 0 0 0\nND 2 0 0 0\nE2L 1 1 2\nE2L 1 1 2\n", "Element IDs have holes")]
fn file_level_errors(#[case] text: &str, #[case] message: &str) {
    let error = read_text(text).unwrap_err();
    assert!(format!("{error:#}").contains(message), "{error:#}");
}

#[rstest]
#[case("MESH2D\nND 1 0 0\n", 2, ErrorKind::Card)]
#[case("MESH2D\nND 1 0 0 0\nND 2 0 0 0\nE4Q 1 1 2 1\n", 4, ErrorKind::Card)]
#[case("MESH2D\n\nND 0 0 0 0\n", 3, ErrorKind::Format)]
#[case("MESH2D\nND 1 0 0 0\nNS 1 x -1\n", 3, ErrorKind::NumericLiteral)]
#[case("MESH2D\nND 1 0 zero 0\n", 2, ErrorKind::NumericLiteral)]
fn line_errors(#[case] text: &str, #[case] line: usize, #[case] kind: ErrorKind) {
    let error = read_text(text).unwrap_err();
    assert!(format!("{error:#}").contains(&format!("line {line}")), "{error:#}");
    assert_eq!(error.downcast_ref::<Error>().map(Error::kind), Some(kind));
}

#[test]
fn zero_indexed_file() {
    let text = "MESH2D\nNUM_MATERIALS_PER_ELEM 1\nND 0 0 0 0\nND 1 1 0 0\nND 2 1 1 0\nE3T 0 0 1 2 1\nNS 0 1 -2 edge\n";
    assert_eq!(
        read_text(text).unwrap_err().downcast_ref::<Error>().map(Error::kind),
        Some(ErrorKind::Format)
    );

    let mut reader = MeshReader::with_options(ParseOptions {
        allow_zero_index: true,
        ..Default::default()
    });
    reader.disable_progress();
    let mesh = reader.parse_lines(text.as_bytes()).unwrap();
    assert!(mesh.zero_index);
    assert_eq!(mesh.node(2).unwrap().y, 1.0);
    assert_eq!(mesh.element(0).unwrap().nodes, vec![0, 1, 2]);
    assert_eq!(mesh.node_string("edge").unwrap().nodes, vec![0, 1, 2]);

    // zero-indexed meshes survive a round trip as long as it is allowed
    let content = MeshWriter::new().file_content(&mesh).unwrap();
    assert_eq!(reader.parse_lines(content.as_bytes()).unwrap(), mesh);
}

#[test]
fn integer_only_materials() {
    let options = ParseOptions {
        allow_float_matid: false,
        ..Default::default()
    };
    assert!(mesh2dm::read_2dm_with(CHANNEL, options).is_ok());

    let mut reader = MeshReader::with_options(options);
    reader.disable_progress();
    let error = reader.parse_lines(MIXED.as_bytes()).unwrap_err();
    assert_eq!(
        error.downcast_ref::<Error>(),
        Some(&Error::IntegerLiteral("0.125".into()))
    );
}

#[test]
fn serialises_to_json() {
    let mesh = read_text(MIXED).unwrap();
    let json = serde_json::to_value(&mesh).unwrap();
    assert_eq!(json["name"], "mixed");
    assert_eq!(json["nodes"][0]["x"], 0.0);
    assert_eq!(json["elements"][0]["kind"], "E9Q");
    assert_eq!(json["elements"][0]["materials"][1], 0.125);
    assert_eq!(json["node_strings"][0]["name"], "everything");
}
