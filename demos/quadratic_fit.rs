//! Quadratic fit demonstration.
//!
//! Fits a degree-2 polynomial to five noisy samples, evaluates it back at
//! the sample locations, and extrapolates one step past the data. Mirrors
//! the classic fit/eval/polyFit walkthrough:
//!
//! ```text
//! x     : [0, 1, 2, 3, 4]
//! y     : [1, 1.8, 1.3, 2.5, 6.3]
//! order : 2
//! ```

use polyfit::prelude::*;

fn format_vec(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{:.6}", v)).collect();
    format!("[{}]", parts.join(", "))
}

fn main() -> Result<(), PolyFitError> {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![1.0, 1.8, 1.3, 2.5, 6.3];
    let x2 = x.clone();
    let order = 2;

    println!("x     : {}", format_vec(&x));
    println!("y     : {}", format_vec(&y));
    println!("x2    : {}", format_vec(&x2));
    println!("order : {}", order);
    println!("{}", "*".repeat(60));
    println!();

    // Step by step: fit, then evaluate.
    let coeffs = fit(&x, &y, order)?;
    println!("coeffs = fit(x, y, order) : {}", format_vec(&coeffs));
    println!(
        "eval(coeffs, x2)          : {}",
        format_vec(&eval_many(&coeffs, &x2))
    );
    println!();

    // Composed: fit and evaluate in one call.
    println!(
        "polyFit(x, y, x2, order)  : {}",
        format_vec(&poly_fit_many(&x, &y, &x2, order)?)
    );
    println!(
        "polyFit(x, y, 5, order)   : {:.6}",
        poly_fit(&x, &y, 5.0, order)?
    );
    println!();

    // Builder surface with a formatted summary.
    let result = PolyFit::new().degree(order).build().fit(&x, &y)?;
    println!("{}", result);

    Ok(())
}
