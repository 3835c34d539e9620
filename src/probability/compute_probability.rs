use crate::error::GaussprobErr;
use crate::integration::simpson::simpson;
use crate::normal::types::{NormalParams, PdfArgs};
use crate::probability::error::ProbabilityErr;
use crate::probability::types::{ProbabilityOptions, Tail};

/// Tail probability of the distribution described by `pdf` and `params`
/// at threshold `c`, with the default integration settings
pub fn probability<F>(
    pdf: F,
    params: &NormalParams,
    c: f64,
    tail: Tail,
) -> Result<f64, GaussprobErr>
where
    F: Fn(PdfArgs) -> f64,
{
    probability_with_options(pdf, params, c, tail, &ProbabilityOptions::default())
}

/// Computes P(x < c) by integrating `pdf` from `lower_limit_sds` standard
/// deviations below the mean up to `c`, then returns it or its complement
/// depending on `tail`
pub fn probability_with_options<F>(
    pdf: F,
    params: &NormalParams,
    c: f64,
    tail: Tail,
    options: &ProbabilityOptions,
) -> Result<f64, GaussprobErr>
where
    F: Fn(PdfArgs) -> f64,
{
    //----------------------------------------
    // Check arguments
    options.validate()?;
    if !c.is_finite() {
        return Err(ProbabilityErr::NonFiniteThreshold(c).into());
    }

    //----------------------------------------
    // P(x < c)
    let a = params.mean() - options.lower_limit_sds * params.sd();
    // The integrator normalizes bound order, so a threshold left of the
    // truncation point would otherwise come back as positive mass
    let lower = if c <= a {
        0.0
    } else {
        simpson(pdf, params, a, c, options.npoints)?
    };

    log::debug!(
        "P(x<{c}) = {lower} for N({}, {}) integrating from {a}",
        params.mean(),
        params.sd()
    );

    Ok(match tail {
        Tail::Lower => lower,
        Tail::Upper => 1.0 - lower,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::integration::error::IntegrationErr;
    use crate::normal::pdf::gaussian_pdf;
    use approx::assert_abs_diff_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use statrs::distribution::{ContinuousCDF, Normal};

    #[test]
    fn lower_tail_one_sd() {
        let p = probability(gaussian_pdf, &NormalParams::standard(), 1.0, Tail::Lower).unwrap();
        assert!((p - 0.841).abs() < 0.0005);
    }

    #[test]
    fn upper_tail_two_sds() {
        let params = NormalParams::new(175.0, 3.0).unwrap();
        let p = probability(gaussian_pdf, &params, 181.0, Tail::default()).unwrap();
        assert!((p - 0.023).abs() < 0.0005);
    }

    #[test]
    fn symmetric_interval_two_sds() {
        let upper = probability(gaussian_pdf, &NormalParams::standard(), 2.0, Tail::Upper).unwrap();
        let p = 1.0 - 2.0 * upper;
        // exact value is 0.9544997
        assert!((p - 0.955).abs() < 0.001);
        assert!((p - 0.9545).abs() < 0.000001);
    }

    #[test]
    fn default_tail_is_upper() {
        assert_eq!(Tail::default(), Tail::Upper);
    }

    #[test]
    fn tails_sum_to_one() {
        let mut rng = StdRng::seed_from_u64(2460123456);
        for _ in 0..100 {
            let mean: f64 = rng.gen_range(-100.0..100.0);
            let sd: f64 = rng.gen_range(0.01..20.0);
            let c: f64 = mean + sd * rng.gen_range(-6.0..6.0);
            let params = NormalParams::new(mean, sd).unwrap();
            let lower = probability(gaussian_pdf, &params, c, Tail::Lower).unwrap();
            let upper = probability(gaussian_pdf, &params, c, Tail::Upper).unwrap();
            assert!((lower + upper - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn agrees_with_reference_cdf() {
        let mut rng = StdRng::seed_from_u64(24601);
        for _ in 0..100 {
            let mean: f64 = rng.gen_range(-50.0..50.0);
            let sd: f64 = rng.gen_range(0.1..10.0);
            let c: f64 = mean + sd * rng.gen_range(-4.0..4.0);
            let params = NormalParams::new(mean, sd).unwrap();
            let reference = Normal::new(mean, sd).unwrap();
            let p = probability(gaussian_pdf, &params, c, Tail::Lower).unwrap();
            // Truncation at 5 sds drops about 2.9e-7 of mass
            assert_abs_diff_eq!(p, reference.cdf(c), epsilon = 1e-6);
        }
    }

    #[test]
    fn threshold_below_lower_limit() {
        let params = NormalParams::new(10.0, 1.0).unwrap();
        assert_eq!(
            probability(gaussian_pdf, &params, 4.0, Tail::Lower).unwrap(),
            0.0
        );
        assert_eq!(
            probability(gaussian_pdf, &params, 5.0, Tail::Upper).unwrap(),
            1.0
        );
    }

    #[test]
    fn far_right_threshold() {
        let params = NormalParams::standard();
        let p = probability(gaussian_pdf, &params, 8.0, Tail::Lower).unwrap();
        assert_abs_diff_eq!(p, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn custom_options() {
        let params = NormalParams::standard();
        let options = ProbabilityOptions {
            npoints: 400,
            lower_limit_sds: 8.0,
        };
        let p = probability_with_options(gaussian_pdf, &params, 0.0, Tail::Lower, &options)
            .unwrap();
        assert_abs_diff_eq!(p, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn non_finite_threshold_err() {
        if let Err(e) = probability(
            gaussian_pdf,
            &NormalParams::standard(),
            f64::INFINITY,
            Tail::Lower,
        ) {
            assert_eq!(e.kind(), ErrorKind::InvalidParameter);
            assert_eq!(
                String::from("while computing probability: threshold should be finite; got inf"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn bad_options_err() {
        let params = NormalParams::standard();
        let zero_panels = ProbabilityOptions {
            npoints: 0,
            ..Default::default()
        };
        assert!(matches!(
            probability_with_options(gaussian_pdf, &params, 0.0, Tail::Lower, &zero_panels),
            Err(GaussprobErr::Integration(IntegrationErr::ZeroPanels))
        ));
        let negative_limit = ProbabilityOptions {
            lower_limit_sds: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            probability_with_options(gaussian_pdf, &params, 0.0, Tail::Lower, &negative_limit),
            Err(GaussprobErr::Probability(ProbabilityErr::BadLowerLimit(_)))
        ));
    }
}
