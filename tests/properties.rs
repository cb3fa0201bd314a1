//! Randomized checks of the algebraic identities the operator surface is
//! expected to satisfy.

use numvec::Vector;
use rand::Rng;

const CASES: usize = 50;
const DIM: usize = 8;

fn random_vector<R: Rng>(rng: &mut R) -> Vector<f64> {
    (0..DIM).map(|_| rng.gen_range(-100.0..100.0)).collect()
}

fn assert_close(actual: &Vector<f64>, expected: &Vector<f64>, tol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() < tol, "{} != {} (tol {})", a, e, tol);
    }
}

#[test]
fn double_negation_is_identity() {
    let mut rng = rand::thread_rng();
    for _ in 0..CASES {
        let v = random_vector(&mut rng);
        assert_eq!(-(-v.clone()), v);
    }
}

#[test]
fn scalar_addition_commutes() {
    let mut rng = rand::thread_rng();
    for _ in 0..CASES {
        let v = random_vector(&mut rng);
        let s: f64 = rng.gen_range(-10.0..10.0);
        assert_eq!(&v + s, s + &v);
    }
}

#[test]
fn scalar_multiplication_commutes() {
    let mut rng = rand::thread_rng();
    for _ in 0..CASES {
        let v = random_vector(&mut rng);
        let s: f64 = rng.gen_range(-10.0..10.0);
        assert_eq!(&v * s, s * &v);
    }
}

#[test]
fn dot_product_is_symmetric() {
    let mut rng = rand::thread_rng();
    for _ in 0..CASES {
        let v1 = random_vector(&mut rng);
        let v2 = random_vector(&mut rng);
        assert_eq!(v1.dot(&v2), v2.dot(&v1));
    }
}

#[test]
fn projection_and_rejection_recompose() {
    let mut rng = rand::thread_rng();
    for _ in 0..CASES {
        let v = random_vector(&mut rng);
        let d = random_vector(&mut rng);
        if d.dot(&d) < 1e-9 {
            continue;
        }
        let parallel = v.project_onto(&d).unwrap();
        let orthogonal = v.reject_from(&d).unwrap();
        assert_close(&(&parallel + &orthogonal), &v, 1e-9);
    }
}

#[test]
fn subtraction_inverts_addition() {
    let mut rng = rand::thread_rng();
    for _ in 0..CASES {
        let v1 = random_vector(&mut rng);
        let v2 = random_vector(&mut rng);
        let sum = &v1 + &v2;
        assert_close(&(&sum - &v2), &v1, 1e-12);
    }
}
