//----------------------------------------
// Console report
//----------------------------------------
use crate::error::GaussprobErr;
use crate::normal::pdf::gaussian_pdf;
use crate::normal::types::NormalParams;
use crate::probability::compute_probability::probability;
use crate::probability::types::Tail;

fn dist_label(params: &NormalParams) -> String {
    format!("N({:.2},{:.2})", params.mean(), params.sd())
}

pub fn lower_tail_line(c: f64, params: &NormalParams, p: f64) -> String {
    format!("P(x<{c:.2}|{})={p:.3}", dist_label(params))
}

pub fn upper_tail_line(c: f64, params: &NormalParams, p: f64) -> String {
    format!("P(x>{c:.2}|{})={p:.3}", dist_label(params))
}

pub fn interval_line(lo: f64, hi: f64, params: &NormalParams, p: f64) -> String {
    format!("P({lo:.2}<x<{hi:.2}|{})={p:.3}", dist_label(params))
}

/// Runs the three fixed computations and formats one line for each:
/// P(x<1) under N(0,1), P(x>mean+2sd) under N(175,3), and P(-2<x<2) under
/// N(0,1)
pub fn standard_report() -> Result<Vec<String>, GaussprobErr> {
    let mut lines = Vec::with_capacity(3);

    let params_1 = NormalParams::standard();
    let c_1 = 1.0;
    let p_1 = probability(gaussian_pdf, &params_1, c_1, Tail::Lower)?;
    lines.push(lower_tail_line(c_1, &params_1, p_1));

    let params_2 = NormalParams::new(175.0, 3.0)?;
    let c_2 = params_2.mean() + 2.0 * params_2.sd();
    let p_2 = probability(gaussian_pdf, &params_2, c_2, Tail::Upper)?;
    lines.push(upper_tail_line(c_2, &params_2, p_2));

    // Symmetric interval from the upper tail: 1 - 2 P(x > c)
    let params_3 = NormalParams::standard();
    let c_3 = 2.0;
    let p_3 = 1.0 - 2.0 * probability(gaussian_pdf, &params_3, c_3, Tail::Upper)?;
    lines.push(interval_line(-c_3, c_3, &params_3, p_3));

    Ok(lines)
}
