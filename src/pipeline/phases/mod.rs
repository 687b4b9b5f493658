// Hook phases, in execution order
//
// Each phase reads what earlier phases left in the HookContext and either
// lets the pipeline continue or halts it with a terminal outcome.

#[path = "01_toolchain.rs"]
pub mod toolchain;
#[path = "02_staged.rs"]
pub mod staged;
#[path = "03_filter.rs"]
pub mod filter;
#[path = "04_inspect.rs"]
pub mod inspect;
#[path = "05_build.rs"]
pub mod build;
