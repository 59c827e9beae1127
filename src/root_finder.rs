use thiserror::Error;
use tracing::trace;

/// Failure of an iterative procedure to produce a result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ConvergenceError {
    #[error("root finder did not converge within {iterations} iterations")]
    RootFinder { iterations: u32 },
    #[error("no volatility bracket found within {steps} steps")]
    Bracket { steps: u32 },
    #[error("non-finite value during root finding")]
    NonFinite,
}

/// Modified regula falsi (Illinois method) for finding a zero of a function
/// of one variable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IllinoisSolver {
    tolerance: f64,
    max_iterations: u32,
}

impl Default for IllinoisSolver {
    fn default() -> IllinoisSolver {
        IllinoisSolver::new(1e-7, 1000)
    }
}

impl IllinoisSolver {
    pub fn new(tolerance: f64, max_iterations: u32) -> IllinoisSolver {
        assert!(tolerance > 0.0);
        IllinoisSolver {
            tolerance,
            max_iterations,
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Finds `x` with `f(x) = 0` between `a` and `b`, where `f(a)` and `f(b)`
    /// have opposite signs.
    ///
    /// Iterates until the bracket is narrower than the tolerance.
    pub fn solve<F>(&self, mut f: F, mut a: f64, mut b: f64) -> Result<f64, ConvergenceError>
    where
        F: FnMut(f64) -> f64,
    {
        let mut fa = f(a);
        let mut fb = f(b);

        let mut iterations = 0;
        while (b - a).abs() > self.tolerance {
            if iterations >= self.max_iterations {
                return Err(ConvergenceError::RootFinder { iterations });
            }
            iterations += 1;

            let c = a + (a - b) * fa / (fb - fa);
            if !c.is_finite() {
                return Err(ConvergenceError::NonFinite);
            }
            let fc = f(c);
            if fc == 0.0 {
                trace!(iterations, "exact root");
                return Ok(c);
            }
            if fc * fb < 0.0 {
                a = b;
                fa = fb;
            } else {
                fa /= 2.0;
            }
            b = c;
            fb = fc;
        }

        if !a.is_finite() {
            return Err(ConvergenceError::NonFinite);
        }
        trace!(iterations, "converged");
        Ok(a)
    }
}
