use octonion::{associator, version, Octonion, OctonionError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn basis_multiplication() {
    println!("Testing basis element multiplication...");

    let i = Octonion::basis(1);
    let j = Octonion::basis(2);
    let l = Octonion::basis(4);

    println!("i² = {}", i * i);
    println!("i*j = {}", i * j);
    println!("j*i = {}", j * i);
    println!("l² = {}", l * l);
    println!("i*l = {}", i * l);
    println!();
}

fn non_associativity() {
    println!("Testing non-associativity...");

    // Classic example: (i*j)*l != i*(j*l)
    let i = Octonion::basis(1);
    let j = Octonion::basis(2);
    let l = Octonion::basis(4);

    let left = (i * j) * l;
    let right = i * (j * l);
    println!("(i*j)*l = {}", left);
    println!("i*(j*l) = {}", right);

    let diff: f64 = associator(i, j, l).e.iter().map(|c| c.abs()).sum();
    if diff > 1e-10 {
        println!("[OK] Non-associative (difference: {:.6})\n", diff);
    } else {
        println!("[FAIL] Should be non-associative!\n");
    }
}

fn norm_properties() {
    println!("Testing norm properties...");

    let a = Octonion::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
    let b = Octonion::new(2.0, 1.0, 0.0, -1.0, 3.0, -2.0, 1.0, 0.0);

    let norm_a = a.norm();
    let norm_b = b.norm();
    let norm_ab = (a * b).norm();

    println!("|a| = {:.6}", norm_a);
    println!("|b| = {:.6}", norm_b);
    println!("|a*b| = {:.6}", norm_ab);
    println!("|a|*|b| = {:.6}", norm_a * norm_b);

    if (norm_ab - norm_a * norm_b).abs() < 1e-10 {
        println!("[OK] Norm property holds\n");
    } else {
        println!("[FAIL] Norm property violated!\n");
    }
}

fn degenerate_inputs() {
    println!("Testing degenerate inputs...");

    let zero = Octonion::zero();
    for (name, res) in [("normalise(0)", zero.normalise()), ("inverse(0)", zero.inverse())] {
        match res {
            Ok(q) => println!("{} = {}", name, q),
            Err(e) => println!("{} -> {} (fallback {})", name, e, e.fallback()),
        }
    }

    let short = [1.0; 7];
    if let Err(e @ OctonionError::InvalidLength { .. }) = Octonion::from_slice(&short) {
        println!("from_slice([1; 7]) -> {}", e);
    }
    println!();
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    println!("=== Octonion Arithmetic Test Suite (v{}) ===\n", version::string());

    basis_multiplication();
    non_associativity();
    norm_properties();
    degenerate_inputs();

    println!("All tests complete!");
}
