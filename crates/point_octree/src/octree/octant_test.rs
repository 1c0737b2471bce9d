use super::*;

// =========================================================================
// Batch 1: Octant Labels
// =========================================================================

/// Slot order matches the bit layout LDB..RUF = 0..7.
#[test]
fn test_index_matches_bits() {
  for (i, octant) in Octant::ALL.iter().enumerate() {
    assert_eq!(octant.index(), i, "{} out of slot order", octant);
    assert_eq!(Octant::from_bits(i as u8), *octant);
    assert_eq!(Octant::from_index(i), Some(*octant));
  }
  assert_eq!(Octant::from_index(8), None, "Only 8 child slots exist");
}

#[test]
fn test_from_sides() {
  assert_eq!(Octant::from_sides(false, false, false), Octant::Ldb);
  assert_eq!(Octant::from_sides(false, false, true), Octant::Ldf);
  assert_eq!(Octant::from_sides(false, true, false), Octant::Lub);
  assert_eq!(Octant::from_sides(true, false, false), Octant::Rdb);
  assert_eq!(Octant::from_sides(true, true, true), Octant::Ruf);
}

/// x selects Left/Right, z selects Down/Up, y selects Back/Front.
#[test]
fn test_containing_axis_mapping() {
  let center = DVec3::splat(5.0);

  assert_eq!(Octant::containing(center, DVec3::new(1.0, 1.0, 1.0)), Octant::Ldb);
  assert_eq!(Octant::containing(center, DVec3::new(9.0, 1.0, 1.0)), Octant::Rdb);
  assert_eq!(Octant::containing(center, DVec3::new(1.0, 9.0, 1.0)), Octant::Ldf);
  assert_eq!(Octant::containing(center, DVec3::new(1.0, 1.0, 9.0)), Octant::Lub);
  assert_eq!(Octant::containing(center, DVec3::new(9.0, 9.0, 9.0)), Octant::Ruf);
}

/// Points on a splitting plane route to the Right/Up/Front side.
#[test]
fn test_containing_ties_go_positive() {
  let center = DVec3::splat(5.0);

  assert_eq!(Octant::containing(center, center), Octant::Ruf);
  assert_eq!(Octant::containing(center, DVec3::new(5.0, 1.0, 1.0)), Octant::Rdb);
  assert_eq!(Octant::containing(center, DVec3::new(1.0, 5.0, 1.0)), Octant::Ldf);
  assert_eq!(Octant::containing(center, DVec3::new(1.0, 1.0, 5.0)), Octant::Lub);
}

#[test]
fn test_flipped() {
  assert_eq!(Octant::Ldb.flipped(X_BIT), Octant::Rdb);
  assert_eq!(Octant::Ldb.flipped(Z_BIT), Octant::Lub);
  assert_eq!(Octant::Ldb.flipped(Y_BIT), Octant::Ldf);
  assert_eq!(Octant::Rub.flipped(X_BIT | Z_BIT | Y_BIT), Octant::Ldf);

  for octant in Octant::ALL {
    assert_eq!(octant.flipped(0b111).flipped(0b111), octant, "Flip must be an involution");
  }
}

/// sign() is laid out as (x, y, z) = (Right, Front, Up).
#[test]
fn test_sign() {
  assert_eq!(Octant::Ldb.sign(), DVec3::splat(-1.0));
  assert_eq!(Octant::Ruf.sign(), DVec3::splat(1.0));
  assert_eq!(Octant::Rdb.sign(), DVec3::new(1.0, -1.0, -1.0));
  assert_eq!(Octant::Ldf.sign(), DVec3::new(-1.0, 1.0, -1.0));
  assert_eq!(Octant::Lub.sign(), DVec3::new(-1.0, -1.0, 1.0));
}

/// A point offset from the center by sign() lands in the same octant.
#[test]
fn test_sign_agrees_with_containing() {
  let center = DVec3::new(2.0, -3.0, 7.5);
  for octant in Octant::ALL {
    let point = center + octant.sign() * 0.25;
    assert_eq!(Octant::containing(center, point), octant);
  }
}

#[test]
fn test_labels() {
  let labels: Vec<String> = Octant::ALL.iter().map(ToString::to_string).collect();
  assert_eq!(labels, ["LDB", "LDF", "LUB", "LUF", "RDB", "RDF", "RUB", "RUF"]);
}
