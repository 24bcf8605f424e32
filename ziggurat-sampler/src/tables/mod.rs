//! Ziggurat tables, set up once on first use and shared afterward.
//!
//! The classic tables are generated from Marsaglia and Tsang's parameters.
//! The modified tables are McFarland's published constants from
//! [`published`].

pub mod alias;
pub mod classic;
pub mod modified;
pub mod published;

use std::sync::LazyLock;

use crate::{constants::*, kernel::Kernel};

pub use alias::{AliasTable, MapLayout};
pub use classic::ClassicTables;
pub use modified::ModifiedTables;

pub static GAUSSIAN_128: LazyLock<ClassicTables> = LazyLock::new(|| {
    ClassicTables::build(Kernel::Gaussian, 128, ZIGGURAT_NOR_128_R, NOR_128_SECTION_AREA)
        .expect("published 128-strip normal parameters")
});

pub static GAUSSIAN_256: LazyLock<ClassicTables> = LazyLock::new(|| {
    ClassicTables::build(Kernel::Gaussian, ZIGGURAT_TABLE_SIZE, ZIGGURAT_NOR_R, NOR_SECTION_AREA)
        .expect("published 256-strip normal parameters")
});

pub static EXPONENTIAL: LazyLock<ClassicTables> = LazyLock::new(|| {
    ClassicTables::build(Kernel::Exponential, ZIGGURAT_TABLE_SIZE, ZIGGURAT_EXP_R, EXP_SECTION_AREA)
        .expect("published 256-strip exponential parameters")
});

pub static MOD_GAUSSIAN: LazyLock<ModifiedTables> = LazyLock::new(|| normal(MapLayout::Byte));

pub static MOD_GAUSSIAN_INT_MAP: LazyLock<ModifiedTables> = LazyLock::new(|| normal(MapLayout::Int));

pub static MOD_EXPONENTIAL: LazyLock<ModifiedTables> = LazyLock::new(|| exponential(MapLayout::Byte));

pub static MOD_EXPONENTIAL_INT_MAP: LazyLock<ModifiedTables> =
    LazyLock::new(|| exponential(MapLayout::Int));

fn normal(layout: MapLayout) -> ModifiedTables {
    use published::*;
    ModifiedTables::from_published(
        Kernel::Gaussian,
        MODIFIED_NOR_X_0,
        &NORMAL_X,
        &NORMAL_Y,
        &NORMAL_IPMF,
        &NORMAL_MAP,
        layout,
    )
    .expect("published modified normal tables")
}

fn exponential(layout: MapLayout) -> ModifiedTables {
    use published::*;
    ModifiedTables::from_published(
        Kernel::Exponential,
        MODIFIED_EXP_X_0,
        &EXPONENTIAL_X,
        &EXPONENTIAL_Y,
        &EXPONENTIAL_IPMF,
        &EXPONENTIAL_MAP,
        layout,
    )
    .expect("published modified exponential tables")
}
