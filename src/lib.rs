pub mod contract;
pub mod math;
pub mod scene;

// ============================================================================
// Contract Macros
// ============================================================================

/// Assert a list of contract conditions when the `contracts` feature is enabled.
///
/// Each condition is anything convertible into a [`contract::Condition`],
/// usually a [`contract::Verdict`] returned by a catalog checker. Expands to
/// [`contract::Contracts::assert_all`], so the result is a
/// `Result<(), ContractError>` ready for `?`.
///
/// # Example
/// ```
/// # use transform2d::check;
/// # use transform2d::contract::{Catalog, ContractMode, Contracts};
/// let contracts = Contracts::new(ContractMode::Debug);
/// let catalog = Catalog::new(&contracts);
/// let m = [1.0_f32, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
/// assert!(check!(contracts, catalog.is_mat3.check_one(&m)).is_ok());
/// ```
///
/// # Zero-Cost Abstraction
/// When compiled without the `contracts` feature, this expands to `Ok(())`.
/// The conditions are not evaluated.
#[macro_export]
#[cfg(feature = "contracts")]
macro_rules! check {
    ($contracts:expr, $($cond:expr),+ $(,)?) => {
        $contracts.assert_all(&[$($crate::contract::Condition::from($cond)),+])
    };
}

#[macro_export]
#[cfg(not(feature = "contracts"))]
macro_rules! check {
    ($contracts:expr, $($cond:expr),+ $(,)?) => {
        ::core::result::Result::<(), $crate::contract::ContractError>::Ok(())
    };
}
