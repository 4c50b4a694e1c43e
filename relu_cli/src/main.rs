//! CLI demo for the rectifier and its custom derivative rule.
//!
//! Samples relu and relu' over a range, renders both curves as an ASCII
//! chart, and validates the derivative rule against finite differences.

use clap::Parser;
use relu_core::{central_diff, max_abs_error, relu, relu_jvp, relu_prime};
use relu_tensor::{ops, Tensor};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot relu and its derivative, then validate the derivative rule", long_about = None)]
struct Args {
    /// Start of the sample range
    #[arg(long, default_value_t = -3.0, allow_negative_numbers = true)]
    start: f32,

    /// End of the sample range (exclusive)
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    stop: f32,

    /// Sample spacing
    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    step: f32,

    /// Chart height in rows
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Print the samples as a table instead of a chart
    #[arg(long)]
    table: bool,
}

fn main() {
    let args = Args::parse();

    if args.step == 0.0 {
        eprintln!("error: --step must be nonzero");
        std::process::exit(1);
    }
    if args.height < 2 {
        eprintln!("error: --height must be at least 2");
        std::process::exit(1);
    }

    println!("=== ReLU with a Custom Derivative Rule ===\n");

    // Sample the range and push the whole batch through the forward-mode
    // rule with a unit tangent: the tangent output is exactly relu'(x).
    let xs = Tensor::arange(args.start, args.stop, args.step);
    if xs.numel() == 0 {
        eprintln!(
            "error: empty range for start={}, stop={}, step={}",
            args.start, args.stop, args.step
        );
        std::process::exit(1);
    }

    let (ys, dys) = ops::relu_jvp(&xs, &Tensor::ones(xs.shape()));

    println!(
        "Sampled {} points on [{}, {}) with step {}\n",
        xs.numel(),
        args.start,
        args.stop,
        args.step
    );

    if args.table {
        print_table(&xs, &ys, &dys);
    } else {
        print_chart(&xs, &ys, &dys, args.height);
    }

    // The convention at the kink, stated explicitly.
    println!("\n=== Derivative at x = 0 ===\n");
    let (y0, dy0) = relu_jvp(0.0, 1.0);
    println!("relu(0)  = {:.10}", y0);
    println!("relu'(0) = {:.10} (defined as 0, never NaN)", dy0);
    println!(
        "Central difference at 0 (eps=1e-7): {:.10} (averages the one-sided slopes)",
        central_diff(relu, 0.0, 1e-7)
    );

    // Validate the rule against finite differences away from the kink,
    // where the derivative actually exists.
    let eps = 1e-7;
    let tolerance = 1e-5;
    let sample: Vec<f64> = xs
        .as_slice()
        .iter()
        .map(|&v| v as f64)
        .filter(|v| v.abs() > 1e-3)
        .collect();
    let analytic: Vec<f64> = sample.iter().map(|&v| relu_prime(v)).collect();
    let numeric: Vec<f64> = sample.iter().map(|&v| central_diff(relu, v, eps)).collect();
    let max_err = max_abs_error(&analytic, &numeric);

    println!("\n=== Finite Difference Validation ===\n");
    println!(
        "Checked {} points away from the kink (eps={:.0e})",
        sample.len(),
        eps
    );
    println!("Max |analytic - numeric|: {:.2e}\n", max_err);

    if max_err < tolerance {
        println!(
            "PASS: Max error ({:.2e}) < tolerance ({:.2e})",
            max_err, tolerance
        );
    } else {
        println!(
            "FAIL: Max error ({:.2e}) >= tolerance ({:.2e})",
            max_err, tolerance
        );
        std::process::exit(1);
    }
}

fn print_table(xs: &Tensor, ys: &Tensor, dys: &Tensor) {
    println!("{:>10} {:>12} {:>12}", "x", "relu(x)", "relu'(x)");
    for i in 0..xs.numel() {
        println!(
            "{:>10.4} {:>12.4} {:>12.4}",
            xs.as_slice()[i],
            ys.as_slice()[i],
            dys.as_slice()[i]
        );
    }
}

fn print_chart(xs: &Tensor, ys: &Tensor, dys: &Tensor, height: usize) {
    let cols = xs.numel();

    let mut y_min = f32::INFINITY;
    let mut y_max = f32::NEG_INFINITY;
    for &v in ys.as_slice().iter().chain(dys.as_slice()) {
        y_min = y_min.min(v);
        y_max = y_max.max(v);
    }
    // Flat curves still need a nonzero vertical span.
    let span = if y_max > y_min { y_max - y_min } else { 1.0 };

    let mut grid = vec![vec![' '; cols]; height];
    // Derivative first so the function wins where the curves overlap.
    plot_into(&mut grid, dys.as_slice(), '+', y_min, span);
    plot_into(&mut grid, ys.as_slice(), '#', y_min, span);

    for (i, row) in grid.iter().enumerate() {
        let frac = 1.0 - i as f32 / (height - 1) as f32;
        let label = y_min + frac * span;
        let line: String = row.iter().collect();
        println!("{:>8.2} | {}", label, line);
    }
    println!("{:>8} +-{}", "", "-".repeat(cols));
    println!(
        "{:>8}   x from {:.2} to {:.2}",
        "",
        xs.as_slice()[0],
        xs.as_slice()[cols - 1]
    );
    println!("\n         # relu(x)    + relu'(x)");
}

fn plot_into(grid: &mut [Vec<char>], values: &[f32], glyph: char, y_min: f32, span: f32) {
    let height = grid.len();
    for (col, &v) in values.iter().enumerate() {
        let t = (v - y_min) / span;
        let row = ((1.0 - t) * (height - 1) as f32).round() as usize;
        grid[row.min(height - 1)][col] = glyph;
    }
}
