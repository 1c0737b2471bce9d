use std::collections::HashSet;

use super::*;
use crate::octree::Octant;

// =========================================================================
// Batch 2: Direction Enumeration
// =========================================================================

/// Table rows run faces, then edges, then vertices.
#[test]
fn test_all_in_table_order() {
  for (i, direction) in Direction::ALL.iter().enumerate() {
    assert_eq!(direction.index(), i, "{} out of table order", direction);
  }

  let classes: Vec<DirectionClass> = Direction::ALL.iter().map(|d| d.class()).collect();
  assert!(classes[..6].iter().all(|c| *c == DirectionClass::Face));
  assert!(classes[6..18].iter().all(|c| *c == DirectionClass::Edge));
  assert!(classes[18..].iter().all(|c| *c == DirectionClass::Vertex));
}

#[test]
fn test_labels_in_table_order() {
  let labels: Vec<String> = Direction::ALL.iter().map(ToString::to_string).collect();
  assert_eq!(
    labels,
    [
      "L", "R", "D", "U", "B", "F", "LD", "LU", "LB", "LF", "RD", "RU", "RB", "RF", "DB", "DF",
      "UB", "UF", "LDB", "LDF", "LUB", "LUF", "RDB", "RDF", "RUB", "RUF",
    ]
  );
}

/// The 26 steps are exactly the 3x3x3 block minus its center.
#[test]
fn test_steps_cover_neighborhood() {
  let mut seen = HashSet::new();
  for direction in Direction::ALL {
    let step = direction.step();
    let key = (step.x as i32, step.y as i32, step.z as i32);
    assert_ne!(key, (0, 0, 0), "{} has a zero step", direction);
    assert!(seen.insert(key), "{} duplicates another step", direction);

    let axes = [step.x, step.y, step.z].iter().filter(|c| **c != 0.0).count();
    let expected = match direction.class() {
      DirectionClass::Face => 1,
      DirectionClass::Edge => 2,
      DirectionClass::Vertex => 3,
    };
    assert_eq!(axes, expected, "{} crosses the wrong number of axes", direction);
  }
  assert_eq!(seen.len(), 26);
}

/// Vertex directions share the octant bit encoding.
#[test]
fn test_vertex_side_bits_match_octant() {
  for (vertex, octant) in Vertex::ALL.iter().zip(Octant::ALL) {
    assert_eq!(
      Direction::Vertex(*vertex).side_bits(),
      octant.bits(),
      "{:?} should point into {}",
      vertex,
      octant
    );
  }
}

/// Side bits are always a subset of the axis mask.
#[test]
fn test_side_bits_within_mask() {
  for direction in Direction::ALL {
    assert_eq!(direction.side_bits() & !direction.axis_mask(), 0, "{}", direction);
  }
}

#[test]
fn test_face_opposite() {
  for face in Face::ALL {
    assert_ne!(face.opposite(), face);
    assert_eq!(face.opposite().opposite(), face);
    assert_eq!(face.opposite().axis_mask(), face.axis_mask());
    assert_eq!(face.step() + face.opposite().step(), DVec3::ZERO);
  }
}

#[test]
fn test_edge_from_faces() {
  assert_eq!(Edge::from_faces(Face::Left, Face::Down), Some(Edge::LeftDown));
  assert_eq!(Edge::from_faces(Face::Down, Face::Left), Some(Edge::LeftDown));
  assert_eq!(Edge::from_faces(Face::Front, Face::Up), Some(Edge::UpFront));
  assert_eq!(Edge::from_faces(Face::Left, Face::Right), None, "Same axis has no edge");

  for edge in Edge::ALL {
    let [a, b] = edge.faces();
    assert_ne!(a.axis_mask(), b.axis_mask(), "{:?} spans one axis twice", edge);
    assert_eq!(Edge::from_faces(a, b), Some(edge));
  }
}

#[test]
fn test_from_impls() {
  assert_eq!(Direction::from(Face::Up), Direction::Face(Face::Up));
  assert_eq!(Direction::from(Edge::RightBack), Direction::Edge(Edge::RightBack));
  assert_eq!(
    Direction::from(Vertex::RightUpFront),
    Direction::Vertex(Vertex::RightUpFront)
  );
}
