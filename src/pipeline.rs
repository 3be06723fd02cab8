

// imports
use crate::config::{files_handling, Config};
use crate::lookup::LookupTable;
use crate::pairs::PairTable;
use crate::scoring::{self, ScoredPair};
use crate::space::{TokenDictionary, TopicModel};

use core::panic;
use std::collections::HashMap;
use std::env;
use std::time::Instant;
use ndarray::Array2;
use rayon::ThreadPoolBuilder;

pub struct Pipeline {}

impl Pipeline {

    // runs the main procedure of 3 steps -
    // -> configuration of arguments and loading of the trained space
    // -> lookup table building and pair assembly
    // -> pairwise scoring and saving

    pub fn run() {

        println!("entering program...");
        let args: Vec<String> = env::args().collect();

        println!("building parameters...");
        let params = match Config::new(&args) {
            Ok(config) => config.get_params(),
            Err(e) => panic!("{}", e)
        };
        println!("{}", params);

        // load the trained space, the token map as json text and the weights as npy
        let t2i = match files_handling::read_input::<HashMap<String, usize>>(&params.words_file) {
            Ok(t2i) => t2i,
            Err(e) => panic!("{}", e)
        };
        let w = match files_handling::read_input::<Array2<f32>>(&params.vecs_file) {
            Ok(w) => w,
            Err(e) => panic!("{}", e)
        };
        println!("loaded {} tokens and a {:?} weight matrix", t2i.len(), w.dim());

        // the expected dimensionality falls back to the trained matrix width
        let num_dims = params.num_dims.unwrap_or(w.ncols());
        let dictionary = TokenDictionary::new(t2i);
        let model = TopicModel::new(w);

        // read the vocabulary and the optional winnow words
        let vocabulary = match files_handling::read_input::<Vec<String>>(&params.vocab_file) {
            Ok(vocabulary) => vocabulary,
            Err(e) => panic!("{}", e)
        };
        let winnow = match &params.winnow_file {
            Some(winnow_file) => match files_handling::read_input::<Vec<String>>(winnow_file) {
                Ok(winnow) => winnow,
                Err(e) => panic!("{}", e)
            },
            None => Vec::new()
        };

        // build the lookup table, unresolvable words are left out
        let timer = Instant::now();
        println!("starting lookup table building...");
        let lookup_table = LookupTable::build(&vocabulary, &dictionary, &model, num_dims);
        println!("resolved {} of {} words, took {} seconds ...", lookup_table.len(), vocabulary.len(), timer.elapsed().as_secs());

        // assemble the joined, winnowed and optionally sorted pairs
        let timer = Instant::now();
        println!("starting pair assembly and scoring...");
        let pair_table = PairTable::assemble(&vocabulary, &lookup_table, &winnow, params.ascending);
        println!("assembled {} pairs", pair_table.len());

        // score pairs on a sized pool, each row is independent of the others
        if let Err(e) = ThreadPoolBuilder::new().num_threads(params.num_threads).build_global() {
            panic!("{}", e)
        }
        let scored = match scoring::score_table(pair_table) {
            Ok(scored) => scored,
            Err(e) => panic!("{}", e)
        };
        println!("scored {} pairs, took {} seconds ...", scored.len(), timer.elapsed().as_secs());

        // save the scored table
        if let Err(e) = files_handling::save_output::<Vec<ScoredPair>>(&params.output_dir, "pairs", scored) {
            panic!("{}", e)
        }
        println!("finished, saved pairs to csv");

    }

}
