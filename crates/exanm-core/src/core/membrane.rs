use super::clash::is_clear;
use super::lattice::lattice_vectors;
use nalgebra::{Point3, Vector3};
use serde::Deserialize;

/// Minimum separation (Å) enforced between a candidate membrane particle and
/// every previously accepted particle. Fixed by the method, independent of the
/// lattice spacing.
pub const CLASH_RADIUS: f64 = 5.0;

/// The slab of space the membrane lattice may occupy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembraneRegion {
    /// Lower z bound of the slab (Å).
    pub z_lo: f64,
    /// Upper z bound of the slab (Å).
    pub z_hi: f64,
    /// Radius of the membrane disk in the xy-plane (Å).
    pub disk_radius: f64,
    /// Radius of an individual membrane particle (Å); lattice spacing is twice this.
    pub particle_radius: f64,
}

impl MembraneRegion {
    pub fn half_thickness(&self) -> f64 {
        (self.z_hi - self.z_lo) / 2.0
    }
}

/// How far the membrane lattice is allowed to extend laterally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MembraneExtent {
    /// Keep membrane particles strictly inside the protein's own bounding box,
    /// so the lattice only fills the projected footprint of the structure.
    #[default]
    ProteinFootprint,
    /// Fill the whole slab disk regardless of the protein's extent.
    FullDisk,
}

/// Grows a membrane lattice around the particles already in `coords` and
/// appends every accepted particle. Returns how many were appended.
///
/// Candidates are enumerated on the lattice of the given `family` at a spacing
/// of twice the particle radius, in ascending `i`, `j`, `k` cell order. A
/// candidate is accepted when it lies inside the slab disk, strictly between
/// the slab's z bounds, inside the lateral extent, and at least [`CLASH_RADIUS`]
/// away from every particle accepted so far, membrane particles included.
/// Acceptance is therefore order-dependent and deterministic.
pub fn build_membrane(
    coords: &mut Vec<Point3<f64>>,
    region: &MembraneRegion,
    family: &str,
    extent: MembraneExtent,
) -> usize {
    let mut box_lo = Vector3::repeat(f64::INFINITY);
    let mut box_hi = Vector3::repeat(f64::NEG_INFINITY);
    for p in coords.iter() {
        for axis in 0..3 {
            box_lo[axis] = box_lo[axis].min(p[axis]);
            box_hi[axis] = box_hi[axis].max(p[axis]);
        }
    }

    let lpv = lattice_vectors(family);
    let a0: Vector3<f64> = lpv.row(0).transpose();
    let a1: Vector3<f64> = lpv.row(1).transpose();
    let a2: Vector3<f64> = lpv.row(2).transpose();

    let spacing = 2.0 * region.particle_radius;
    let half = region.half_thickness();
    let cell_bound =
        |axis: usize| ((region.disk_radius + lpv[(axis, 2)] * half) / region.particle_radius) as i64;
    let (imax, jmax, kmax) = (cell_bound(0), cell_bound(1), cell_bound(2));

    let disk_radius2 = region.disk_radius * region.disk_radius;
    let mut accepted = 0;
    for i in -imax..=imax {
        for j in -jmax..=jmax {
            for k in -kmax..=kmax {
                let cell = (i as f64) * a0 + (j as f64) * a1 + (k as f64) * a2;
                let candidate = Point3::from(spacing * cell);

                if candidate.coords.norm_squared() >= disk_radius2 {
                    continue;
                }
                if candidate.z <= region.z_lo || candidate.z >= region.z_hi {
                    continue;
                }
                if extent == MembraneExtent::ProteinFootprint {
                    let inside = (0..3)
                        .all(|axis| candidate[axis] > box_lo[axis] && candidate[axis] < box_hi[axis]);
                    if !inside {
                        continue;
                    }
                }
                if is_clear(&candidate, coords, CLASH_RADIUS) {
                    coords.push(candidate);
                    accepted += 1;
                }
            }
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    // A sparse scaffold spanning a cube, loose enough that lattice candidates
    // can clear the 5 Å rejection radius.
    fn scaffold() -> Vec<Point3<f64>> {
        let mut points = Vec::new();
        for &x in &[-15.0, 15.0] {
            for &y in &[-15.0, 15.0] {
                for &z in &[-15.0, 15.0] {
                    points.push(Point3::new(x, y, z));
                }
            }
        }
        points.push(Point3::new(0.0, 0.0, 0.0));
        points
    }

    fn default_region() -> MembraneRegion {
        MembraneRegion {
            z_lo: -13.0,
            z_hi: 13.0,
            disk_radius: 80.0,
            particle_radius: 2.5,
        }
    }

    #[test]
    fn accepted_particles_stay_inside_the_slab_disk() {
        let mut coords = scaffold();
        let n_real = coords.len();
        let region = default_region();
        let added = build_membrane(&mut coords, &region, "FCC", MembraneExtent::ProteinFootprint);
        assert!(added > 0, "scaffold should leave room for membrane particles");
        for p in &coords[n_real..] {
            assert!(p.z > region.z_lo && p.z < region.z_hi);
            assert!(p.coords.norm_squared() < region.disk_radius * region.disk_radius);
        }
    }

    #[test]
    fn footprint_extent_respects_the_protein_bounding_box() {
        let mut coords = scaffold();
        let n_real = coords.len();
        build_membrane(&mut coords, &default_region(), "FCC", MembraneExtent::ProteinFootprint);
        for p in &coords[n_real..] {
            for axis in 0..3 {
                assert!(p[axis] > -15.0 && p[axis] < 15.0);
            }
        }
    }

    #[test]
    fn full_disk_extent_accepts_at_least_as_many_particles_as_footprint() {
        let mut footprint = scaffold();
        let footprint_added =
            build_membrane(&mut footprint, &default_region(), "FCC", MembraneExtent::ProteinFootprint);
        let mut full = scaffold();
        let full_added =
            build_membrane(&mut full, &default_region(), "FCC", MembraneExtent::FullDisk);
        assert!(full_added >= footprint_added);
        assert!(full_added > footprint_added, "80 Å disk extends well past the scaffold");
    }

    #[test]
    fn accepted_particles_keep_the_rejection_radius_from_each_other() {
        let mut coords = scaffold();
        let n_real = coords.len();
        build_membrane(&mut coords, &default_region(), "FCC", MembraneExtent::ProteinFootprint);
        let membrane = &coords[n_real..];
        for (a, p) in membrane.iter().enumerate() {
            for q in &membrane[a + 1..] {
                assert!((p - q).norm() >= CLASH_RADIUS - 1e-9);
            }
            for q in &coords[..n_real] {
                assert!((p - q).norm() >= CLASH_RADIUS - 1e-9);
            }
        }
    }

    #[test]
    fn growth_is_deterministic_across_runs() {
        let mut first = scaffold();
        build_membrane(&mut first, &default_region(), "FCC", MembraneExtent::ProteinFootprint);
        let mut second = scaffold();
        build_membrane(&mut second, &default_region(), "FCC", MembraneExtent::ProteinFootprint);
        assert_eq!(first, second);
    }

    #[test]
    fn shrunken_disk_yields_no_membrane_particles() {
        let mut coords = scaffold();
        let region = MembraneRegion {
            disk_radius: 1.0,
            ..default_region()
        };
        let added = build_membrane(&mut coords, &region, "FCC", MembraneExtent::ProteinFootprint);
        assert_eq!(added, 0);
        assert_eq!(coords.len(), scaffold().len());
    }

    #[test]
    fn simple_cubic_lattice_also_fills_the_scaffold() {
        let mut coords = scaffold();
        let added = build_membrane(&mut coords, &default_region(), "SC", MembraneExtent::ProteinFootprint);
        assert!(added > 0);
    }
}
