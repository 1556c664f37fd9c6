use dyndim_core::{make_ddim, Error};

#[test]
fn add_is_elementwise() {
    let lhs = make_ddim(&[1, 2]).unwrap();
    let rhs = make_ddim(&[3, 4]).unwrap();
    assert_eq!((lhs + rhs).unwrap(), make_ddim(&[4, 6]).unwrap());
}

#[test]
fn mul_is_elementwise() {
    let lhs = make_ddim(&[2, 3, 4]).unwrap();
    let rhs = make_ddim(&[5, 6, 7]).unwrap();
    assert_eq!((lhs * rhs).unwrap(), make_ddim(&[10, 18, 28]).unwrap());
}

#[test]
fn add_commutes() {
    let lhs = make_ddim(&[1, 2, 3, 4]).unwrap();
    let rhs = make_ddim(&[9, 8, 7, 6]).unwrap();
    assert_eq!((lhs + rhs).unwrap(), (rhs + lhs).unwrap());
}

#[test]
fn mul_commutes() {
    let lhs = make_ddim(&[1, 2, 3, 4]).unwrap();
    let rhs = make_ddim(&[9, 8, 7, 6]).unwrap();
    assert_eq!((lhs * rhs).unwrap(), (rhs * lhs).unwrap());
}

#[test]
fn mismatched_rank_add_fails() {
    let lhs = make_ddim(&[1, 2]).unwrap();
    let rhs = make_ddim(&[1, 2, 3]).unwrap();
    assert!(matches!(
        lhs + rhs,
        Err(Error::RankMismatch { lhs: 2, rhs: 3 })
    ));
}

#[test]
fn mismatched_rank_mul_fails() {
    let lhs = make_ddim(&[1, 2, 3, 4]).unwrap();
    let rhs = make_ddim(&[1]).unwrap();
    assert!(matches!(
        lhs * rhs,
        Err(Error::RankMismatch { lhs: 4, rhs: 1 })
    ));
}

#[test]
fn equality_requires_equal_rank() {
    // Same extents where they overlap, still different shapes.
    let row = make_ddim(&[3]).unwrap();
    let column = make_ddim(&[3, 1]).unwrap();
    assert_ne!(row, column);
}

#[test]
fn equality_is_elementwise() {
    let lhs = make_ddim(&[2, 3]).unwrap();
    assert_eq!(lhs, make_ddim(&[2, 3]).unwrap());
    assert_ne!(lhs, make_ddim(&[3, 2]).unwrap());
    assert_eq!(lhs, lhs);
}

#[test]
fn product_matches_vectorize_fold() {
    for extents in [
        vec![7],
        vec![2, 3],
        vec![2, 3, 4],
        vec![1, 1, 1, 1, 1],
        vec![2, 2, 2, 2, 2, 2, 2, 2, 2],
    ] {
        let shape = make_ddim(&extents).unwrap();
        assert_eq!(shape.product(), shape.vectorize().iter().product::<i64>());
    }
}

#[test]
fn product_of_rank_one_is_the_extent() {
    assert_eq!(make_ddim(&[7]).unwrap().product(), 7);
}

#[test]
fn product_of_matrix() {
    assert_eq!(make_ddim(&[2, 3]).unwrap().product(), 6);
}

#[test]
fn product_is_wide_enough_for_large_tensors() {
    // Each extent fits an i32, the element count does not.
    let shape = make_ddim(&[100_000, 100_000]).unwrap();
    assert_eq!(shape.product(), 10_000_000_000);
}
