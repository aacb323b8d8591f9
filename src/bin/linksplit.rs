//! an executable preparing link prediction benchmark splits from a raw edge list
//! example usage:
//! linksplit --input datasets/raw/USAir.txt --outdir datasets --name USAir --test-ratio 0.1 --val-ratio 0.1 --seed1 42 --seed2 42
//! linksplit --input graph.txt --outdir out --name graph --sampler degree_weighted
//!
//! The TP stage writes Train_pos.txt, Test_pos.txt and Test_neg.txt under
//! <outdir>/<name>/TP_<seed1>/, the TV stage writes Train_pos.txt,
//! Train_neg.txt, Val_pos.txt and Val_neg.txt under the nested TV_<seed2>/
//! directory.

use anyhow::anyhow;
use clap::{Arg, ArgMatches, Command};
use cpu_time::ProcessTime;

use linksplit::prelude::*;

fn parse_ratio(matches: &ArgMatches, name: &str) -> anyhow::Result<f64> {
    match matches.value_of(name) {
        Some(str) => {
            let res = str.parse::<f64>();
            match res {
                Ok(val) => Ok(val),
                _ => Err(anyhow!("error parsing {}", name)),
            }
        }
        _ => Err(anyhow!("error parsing {}", name)),
    }
} // end of parse_ratio

fn parse_seed(matches: &ArgMatches, name: &str) -> anyhow::Result<u64> {
    match matches.value_of(name) {
        Some(str) => {
            let res = str.parse::<u64>();
            match res {
                Ok(val) => Ok(val),
                _ => Err(anyhow!("error parsing {}", name)),
            }
        }
        _ => Err(anyhow!("error parsing {}", name)),
    }
} // end of parse_seed

pub fn main() {
    //
    let _ = env_logger::builder().is_test(true).try_init();
    log::info!("logger initialized");
    //
    let matches = Command::new("linksplit")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .long("input")
                .takes_value(true)
                .required(true)
                .help("raw edge list file, one `u v` pair per line"),
        )
        .arg(
            Arg::new("outdir")
                .long("outdir")
                .takes_value(true)
                .required(true)
                .help("root directory receiving the benchmark layout"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .takes_value(true)
                .required(true)
                .help("dataset name used in the output layout"),
        )
        .arg(
            Arg::new("splitter")
                .long("splitter")
                .takes_value(true)
                .default_value("random")
                .help("split strategy name"),
        )
        .arg(
            Arg::new("sampler")
                .long("sampler")
                .takes_value(true)
                .default_value("random")
                .help("negative sampler name : random, random_visible or degree_weighted"),
        )
        .arg(
            Arg::new("test_ratio")
                .long("test-ratio")
                .takes_value(true)
                .default_value("0.1")
                .help("fraction of edges held out as test positives"),
        )
        .arg(
            Arg::new("val_ratio")
                .long("val-ratio")
                .takes_value(true)
                .default_value("0.1")
                .help("fraction of train positives held out as validation positives"),
        )
        .arg(
            Arg::new("seed1")
                .long("seed1")
                .takes_value(true)
                .default_value("42")
                .help("seed of the TP stage"),
        )
        .arg(
            Arg::new("seed2")
                .long("seed2")
                .takes_value(true)
                .default_value("42")
                .help("seed of the TV stage"),
        )
        .get_matches();

    // decode args

    let input = matches.value_of("input").unwrap_or("").to_string();
    let outdir = matches.value_of("outdir").unwrap_or("").to_string();
    let name = matches.value_of("name").unwrap_or("").to_string();
    if input.is_empty() || outdir.is_empty() || name.is_empty() {
        log::error!("input, outdir and name are required");
        std::process::exit(1);
    }
    let splitter = matches.value_of("splitter").unwrap_or("random").to_string();
    let sampler = matches.value_of("sampler").unwrap_or("random").to_string();
    //
    let test_ratio;
    match parse_ratio(&matches, "test_ratio") {
        Ok(val) => {
            test_ratio = val;
        }
        Err(e) => {
            log::error!("error : {:?}", e);
            std::process::exit(1);
        }
    }
    let val_ratio;
    match parse_ratio(&matches, "val_ratio") {
        Ok(val) => {
            val_ratio = val;
        }
        Err(e) => {
            log::error!("error : {:?}", e);
            std::process::exit(1);
        }
    }
    let seed1;
    match parse_seed(&matches, "seed1") {
        Ok(val) => {
            seed1 = val;
        }
        Err(e) => {
            log::error!("error : {:?}", e);
            std::process::exit(1);
        }
    }
    let seed2;
    match parse_seed(&matches, "seed2") {
        Ok(val) => {
            seed2 = val;
        }
        Err(e) => {
            log::error!("error : {:?}", e);
            std::process::exit(1);
        }
    }
    log::info!(
        "input : {}, splitter : {}, sampler : {}, test_ratio : {}, val_ratio : {}",
        input,
        splitter,
        sampler,
        test_ratio,
        val_ratio
    );
    //
    // load the raw graph
    //
    let cpu_start = ProcessTime::now();
    let res = load_edges(&input);
    if res.is_err() {
        log::error!("error : {:?}", res.as_ref().err());
        log::error!("linksplit failed reading {:?}", input);
        std::process::exit(1);
    }
    let (edge_set, report) = res.unwrap();
    println!("{}", report);
    let edges: Vec<Edge> = edge_set.iter().copied().collect();
    //
    let splits = SplitRegistry::with_defaults();
    let samplers = SamplerRegistry::with_defaults();
    //
    // TP stage
    //
    let tp_params = TpParams::new(&splitter, &sampler, test_ratio, seed1);
    let tp_out = match run_tp(&edges, &splits, &samplers, &tp_params) {
        Ok(out) => out,
        Err(e) => {
            log::error!("error : {:?}", e);
            log::error!("TP stage failed");
            std::process::exit(1);
        }
    };
    let tp_path = tp_dir(&outdir, &name, seed1);
    if let Err(e) = save_tp_output(&tp_path, &tp_out) {
        log::error!("error : {:?}", e);
        log::error!("could not write TP stage to {:?}", tp_path.as_os_str());
        std::process::exit(1);
    }
    println!("[TP] output : {:?}", tp_path.as_os_str());
    //
    // TV stage on the TP train positives
    //
    let tv_params = TvParams::new(&splitter, &sampler, val_ratio, seed2);
    let tv_out = match run_tv(&tp_out.train_pos, &edges, &splits, &samplers, &tv_params) {
        Ok(out) => out,
        Err(e) => {
            log::error!("error : {:?}", e);
            log::error!("TV stage failed");
            std::process::exit(1);
        }
    };
    let tv_path = tv_dir(&tp_path, seed2);
    if let Err(e) = save_tv_output(&tv_path, &tv_out) {
        log::error!("error : {:?}", e);
        log::error!("could not write TV stage to {:?}", tv_path.as_os_str());
        std::process::exit(1);
    }
    println!("[TV] output : {:?}", tv_path.as_os_str());
    //
    println!(" total cpu time {:?}", cpu_start.elapsed());
} // end of main
