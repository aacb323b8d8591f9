//! lib target


use env_logger::{Builder};

#[macro_use]
extern crate  lazy_static;

lazy_static! {
    static ref LOG: u64 = {
        let res = init_log();
        res
    };
}

// install a logger facility
#[allow(unused)]
fn init_log() -> u64 {
    Builder::from_default_env().init();
    println!("\n ************** initializing logger *****************\n");
    return 1;
}

pub mod error;

pub mod graph;

pub mod io;

pub mod split;

pub mod sampling;

pub mod stages;

pub mod prelude;
