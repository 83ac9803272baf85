//! Integration tests for TOML scene documents

use elbow_router::{route_scene, RoutingError, Scene, SceneError, Strategy};

const DIAGRAM: &str = r#"
[routing]
sample_count = 20

[[elements]]
id = "a"
kind = "rect"
x = 100.0
y = 100.0
width = 100.0
height = 80.0

[[elements]]
id = "b"
kind = "ellipse"
x = 400.0
y = 100.0
width = 100.0
height = 100.0

[[elements]]
id = "c"
kind = "roundRect"
x = 280.0
y = 120.0
width = 40.0
height = 40.0

[[elements]]
id = "note"
kind = "text"
x = 100.0
y = 300.0
width = 200.0
height = 20.0

[[connectors]]
id = "c1"
from = "a"
to = "b"
from_site = "right"
to_site = "left"

[[connectors]]
id = "c2"
from = "a"
to = "note"
"#;

#[test]
fn test_route_all_in_document_order() {
    let scene = Scene::from_str(DIAGRAM).expect("Should parse");
    assert_eq!(scene.config.sample_count, 20);

    let routed = scene.route_all().expect("Should route");
    assert_eq!(routed.len(), 2);
    assert_eq!(routed[0].id.as_str(), "c1");
    assert_eq!(routed[1].id.as_str(), "c2");

    assert_eq!(routed[0].path.strategy, Strategy::StartPerimeter);
    assert_eq!(
        routed[0].path.path_data(),
        "M 200 140 L 200 200 L 400 200 L 400 150"
    );
    assert_eq!(routed[1].path.start_site.id, "bottom");
    assert_eq!(routed[1].path.end_site.id, "top");
}

#[test]
fn test_groups_route_as_their_union() {
    let source = r#"
[[elements]]
id = "a"
x = 0.0
y = 0.0
width = 100.0
height = 100.0

[[elements]]
id = "cluster"

[[elements.children]]
id = "n1"
x = 300.0
y = 0.0
width = 50.0
height = 40.0

[[elements.children]]
id = "n2"
kind = "hexagon"
x = 360.0
y = 60.0
width = 40.0
height = 40.0

[[connectors]]
id = "link"
from = "a"
to = "cluster"
"#;
    let routed = route_scene(source).expect("Should route");
    let path = &routed[0].path;
    assert_eq!(path.start_site.id, "right");
    assert_eq!(path.end_site.id, "left");
    assert_eq!(path.end_site.point.x, 300.0);
    assert_eq!(path.end_site.point.y, 50.0);
}

#[test]
fn test_unknown_endpoint_is_an_error() {
    let source = DIAGRAM.replace("to = \"note\"", "to = \"missing\"");
    let err = route_scene(&source).expect_err("Should fail");
    assert!(matches!(
        err,
        SceneError::Routing(RoutingError::UnknownElement { ref element }) if element == "missing"
    ));
}

#[test]
fn test_empty_group_is_an_error() {
    let source = r#"
[[elements]]
id = "a"
x = 0.0
y = 0.0
width = 10.0
height = 10.0

[[elements]]
id = "g"
kind = "group"

[[connectors]]
id = "c"
from = "a"
to = "g"
"#;
    let err = route_scene(source).expect_err("Should fail");
    assert!(matches!(
        err,
        SceneError::Routing(RoutingError::EmptyGroup { .. })
    ));
}

#[test]
fn test_scene_from_file() {
    let path = std::env::temp_dir().join(format!("elbow-router-scene-{}.toml", std::process::id()));
    std::fs::write(&path, DIAGRAM).expect("Should write");
    let scene = Scene::from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(scene.expect("Should load").connectors.len(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Scene::from_file(std::path::Path::new("/nonexistent/scene.toml")).expect_err("Should fail");
    assert!(matches!(err, SceneError::Io(_)));
}
