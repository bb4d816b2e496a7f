use tides_engine::islands::count_islands;
use tides_engine::terrain::{GridLocation, Terrain};

fn terrain(rows: Vec<Vec<f64>>) -> Terrain {
    Terrain::new(rows, vec![]).unwrap()
}

#[test]
fn ramp_at_1_5_is_one_island() {
    let t = terrain(vec![
        vec![0.0, 1.0, 2.0],
        vec![1.0, 2.0, 3.0],
        vec![2.0, 3.0, 4.0],
    ]);
    // Dry cells: (0,2), (1,1), (1,2), (2,0), (2,1), (2,2) - all 8-connected.
    assert_eq!(count_islands(&t, 1.5), 1);
}

#[test]
fn water_at_or_above_global_max_leaves_no_land() {
    let t = terrain(vec![vec![0.0, 1.0], vec![2.0, 3.0]]);
    assert_eq!(count_islands(&t, 3.0), 0);
    assert_eq!(count_islands(&t, 10.0), 0);
}

#[test]
fn water_below_global_min_is_one_landmass() {
    let t = terrain(vec![
        vec![5.0, 1.0, 5.0],
        vec![1.0, 5.0, 1.0],
        vec![5.0, 1.0, 5.0],
    ]);
    // Nothing submerged: a rectangular grid is always 8-connected.
    assert_eq!(count_islands(&t, 0.5), 1);
}

#[test]
fn anti_diagonal_contact_is_one_island() {
    // Land only on the (0,1)/(1,0) anti-diagonal; the main diagonal is
    // submerged. The (+1,-1) forward offset must merge these two cells.
    let t = terrain(vec![vec![0.0, 5.0], vec![5.0, 0.0]]);
    assert_eq!(count_islands(&t, 1.0), 1);
}

#[test]
fn main_diagonal_contact_is_one_island() {
    let t = terrain(vec![vec![5.0, 0.0], vec![0.0, 5.0]]);
    assert_eq!(count_islands(&t, 1.0), 1);
}

#[test]
fn channel_splits_two_islands() {
    // A flooded middle column separates two vertical strips of land.
    let t = terrain(vec![
        vec![5.0, 0.0, 5.0],
        vec![5.0, 0.0, 5.0],
        vec![5.0, 0.0, 5.0],
    ]);
    assert_eq!(count_islands(&t, 1.0), 2);
}

#[test]
fn rising_water_severs_a_corner_bridge() {
    // Two peaks joined only through the low saddle at (1,1): one island
    // while the saddle is dry, two once the water covers it.
    let t = terrain(vec![
        vec![5.0, 0.0, 0.0],
        vec![0.0, 2.0, 0.0],
        vec![0.0, 0.0, 5.0],
    ]);
    assert_eq!(count_islands(&t, 1.0), 1);
    assert_eq!(count_islands(&t, 3.0), 2);
}

#[test]
fn isolated_peaks_count_separately() {
    let t = terrain(vec![
        vec![9.0, 0.0, 0.0, 0.0, 9.0],
        vec![0.0, 0.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 9.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 0.0, 0.0],
        vec![9.0, 0.0, 0.0, 0.0, 9.0],
    ]);
    assert_eq!(count_islands(&t, 1.0), 5);
}

#[test]
fn single_cell_grid() {
    let t = terrain(vec![vec![2.0]]);
    assert_eq!(count_islands(&t, 1.0), 1);
    assert_eq!(count_islands(&t, 2.0), 0);
}

#[test]
fn sources_do_not_affect_island_counts() {
    // Flooding is elevation driven; designated sources are model data only.
    let rows = vec![vec![5.0, 0.0, 5.0], vec![5.0, 0.0, 5.0]];
    let without = Terrain::new(rows.clone(), vec![]).unwrap();
    let with = Terrain::new(rows, vec![GridLocation::new(0, 1)]).unwrap();
    assert_eq!(count_islands(&without, 1.0), count_islands(&with, 1.0));
}
