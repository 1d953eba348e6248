use gasviz_core::{Result, RunParameters};

/// Ideal gas constant in L·atm/(mol·K)
pub const GAS_CONSTANT: f64 = 0.0821;
/// Molecules drawn per mole of gas
pub const MOLECULES_PER_MOLE: f64 = 100.0;
/// Initial speed per square root of kelvin
pub const SPEED_PER_SQRT_KELVIN: f64 = 0.5;

/// Values the population of a run is built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedRun {
    pub moles: f64,
    pub count: usize,
    pub initial_speed: f64,
}

/// Moles from `PV = nRT`, never negative and never above `max_molecules`.
pub fn molecule_count(moles: f64, max_molecules: usize) -> usize {
    let raw = (moles * MOLECULES_PER_MOLE).floor();
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    (raw as usize).min(max_molecules)
}

/// Speed every molecule starts with, growing with the square root of temperature.
pub fn initial_speed(temperature: f64) -> f64 {
    temperature.sqrt() * SPEED_PER_SQRT_KELVIN
}

/// Derive population size and initial speed from volume, temperature and pressure.
///
/// # Examples
///
/// ```
/// # use gasviz_core::RunParameters;
/// # use gasviz_solver::initializer::derive_run;
/// let run = derive_run(&RunParameters::new(5.0, 300.0, 1.0), 30).unwrap();
/// assert_eq!(run.count, 20);
/// assert!(derive_run(&RunParameters::new(50.0, 0.0, 1.0), 30).is_err());
/// ```
pub fn derive_run(params: &RunParameters, max_molecules: usize) -> Result<DerivedRun> {
    params.validate()?;
    let moles = (params.pressure * params.volume) / (GAS_CONSTANT * params.temperature);
    Ok(DerivedRun {
        moles,
        count: molecule_count(moles, max_molecules),
        initial_speed: initial_speed(params.temperature),
    })
}
