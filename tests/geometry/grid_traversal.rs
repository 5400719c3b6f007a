use na::{Point2, Point3};
use voxelmath::grid::{
    for_each_from_to, for_each_from_to_2d, points_from_to, points_from_to_2d,
};

#[test]
fn unit_square_is_enumerated_lexicographically() {
    let points: Vec<_> = points_from_to_2d(Point2::new(0, 0), Point2::new(1, 1), 1).collect();
    assert_eq!(
        points,
        vec![
            Point2::new(0, 0),
            Point2::new(0, 1),
            Point2::new(1, 0),
            Point2::new(1, 1),
        ]
    );
}

#[test]
fn the_sequence_is_restartable() {
    let start = Point3::new(-2, 4, 0);
    let end = Point3::new(1, 2, 3);

    let first: Vec<_> = points_from_to(start, end, 1).collect();
    let second: Vec<_> = points_from_to(start, end, 1).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4 * 3 * 4);
}

#[test]
fn descending_axes_step_downward() {
    let points: Vec<_> = points_from_to_2d(Point2::new(1, 1), Point2::new(0, 0), 1).collect();
    assert_eq!(
        points,
        vec![
            Point2::new(1, 1),
            Point2::new(1, 0),
            Point2::new(0, 1),
            Point2::new(0, 0),
        ]
    );
}

#[test]
fn a_flat_axis_is_visited_exactly_once() {
    let points: Vec<_> = points_from_to_2d(Point2::new(5, -1), Point2::new(5, 1), 1).collect();
    assert_eq!(
        points,
        vec![Point2::new(5, -1), Point2::new(5, 0), Point2::new(5, 1)]
    );

    // Start == end on every axis still yields the single corner.
    let single: Vec<_> = points_from_to(Point3::new(2, 2, 2), Point3::new(2, 2, 2), 3).collect();
    assert_eq!(single, vec![Point3::new(2, 2, 2)]);
}

#[test]
fn larger_steps_skip_points_and_keep_on_grid_endpoints() {
    let points: Vec<_> = points_from_to_2d(Point2::new(0, 0), Point2::new(4, 0), 2).collect();
    assert_eq!(
        points,
        vec![Point2::new(0, 0), Point2::new(2, 0), Point2::new(4, 0)]
    );

    // An endpoint off the step grid is not visited.
    let points: Vec<_> = points_from_to_2d(Point2::new(0, 0), Point2::new(5, 0), 2).collect();
    assert_eq!(
        points,
        vec![Point2::new(0, 0), Point2::new(2, 0), Point2::new(4, 0)]
    );
}

#[test]
fn three_dimensional_order_varies_z_fastest() {
    let points: Vec<_> = points_from_to(Point3::new(0, 0, 0), Point3::new(1, 1, 1), 1).collect();
    assert_eq!(points[0], Point3::new(0, 0, 0));
    assert_eq!(points[1], Point3::new(0, 0, 1));
    assert_eq!(points[2], Point3::new(0, 1, 0));
    assert_eq!(points[4], Point3::new(1, 0, 0));
    assert_eq!(points.len(), 8);
}

#[test]
fn eager_and_lazy_walks_agree() {
    let start2 = Point2::new(3, -2);
    let end2 = Point2::new(-1, 2);
    let mut eager2 = Vec::new();
    for_each_from_to_2d(start2, end2, 2, |x, y| eager2.push(Point2::new(x, y)));
    let lazy2: Vec<_> = points_from_to_2d(start2, end2, 2).collect();
    assert_eq!(eager2, lazy2);

    let start3 = Point3::new(0, 5, -3);
    let end3 = Point3::new(2, 3, 0);
    let mut eager3 = Vec::new();
    for_each_from_to(start3, end3, 1, |x, y, z| eager3.push(Point3::new(x, y, z)));
    let lazy3: Vec<_> = points_from_to(start3, end3, 1).collect();
    assert_eq!(eager3, lazy3);
    assert_eq!(eager3.len(), 3 * 3 * 4);
}

#[test]
#[should_panic(expected = "step must be positive")]
fn zero_step_is_rejected() {
    let _ = points_from_to_2d(Point2::new(0, 0), Point2::new(1, 1), 0);
}
