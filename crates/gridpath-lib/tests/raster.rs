use gridpath_lib::{
    load_map, sample_map, save_map, GridCoord, MapCanvas, OccupancyGrid, DEFAULT_THRESHOLD,
};

#[test]
fn saved_maps_load_back_pixel_for_pixel() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("map.png");

    let mut canvas = MapCanvas::new(64, 48);
    canvas.padded_rect(20, 10, 40, 30, 5);
    let map = canvas.into_image();

    save_map(&path, &map).expect("save succeeds");
    let loaded = load_map(&path).expect("load succeeds");

    assert_eq!(loaded.dimensions(), (64, 48));
    assert_eq!(loaded.as_raw(), map.as_raw());
}

#[test]
fn loading_a_missing_map_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    assert!(load_map(&dir.path().join("absent.png")).is_err());
}

#[test]
fn sample_map_converts_to_a_grid_with_blocked_shells() {
    let map = sample_map();
    let grid = OccupancyGrid::from_image(&map, DEFAULT_THRESHOLD).expect("map converts");

    assert_eq!(grid.width(), 1200);
    assert_eq!(grid.height(), 500);

    // Outer border and obstacle shells are black, so they block.
    assert!(grid.is_blocked(GridCoord::new(2, 2)));
    assert!(grid.is_blocked(GridCoord::new(97, 200)));

    // Gray obstacle cores sit above the threshold and stay traversable.
    assert!(grid.is_free(GridCoord::new(137, 200)));

    // Open background is free.
    assert!(grid.is_free(GridCoord::new(600, 30)));
}
