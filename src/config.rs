

use serde_json::Value;
use std::{fs, error::Error, fmt::Display};

#[derive(Clone, Debug)]
pub struct JsonTypes {
    pub vocab_file: String,
    pub words_file: String,
    pub vecs_file: String,
    pub output_dir: String,
    pub winnow_file: Option<String>,
    pub num_dims: Option<usize>,
    pub ascending: bool,
    pub num_threads: usize,
}

impl Display for JsonTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "using parameters:
        vocab_file: {}
        words_file: {}
        vecs_file: {}
        output_dir: {}
        winnow_file: {:?}
        num_dims: {:?}
        ascending: {}
        num_threads: {}",
        self.vocab_file, self.words_file, self.vecs_file, self.output_dir,
        self.winnow_file, self.num_dims, self.ascending, self.num_threads
        )
    }
}

pub struct Config {
    params: JsonTypes
}

impl Config {

    pub fn get_params(&self) -> JsonTypes {
        return self.params.clone()
    }

    pub fn new(args: &[String]) -> Result<Config, Box<dyn Error>> {

        if args.len() != 2 {
            return Err(format!("input should be a path to json file only").into());
        }

        // parse input json
        let f = fs::File::open(&args[1]).expect("cannot open json file");
        let json: Value = serde_json::from_reader(f).expect("cannot read json file");

        // validate the mandatory paths in json
        let vocab_file = json.get("vocab_file").expect("vocab_file was not supplied through json").as_str().expect("cannot cast vocab_file to string");
        let words_file = json.get("words_file").expect("words_file was not supplied through json").as_str().expect("cannot cast words_file to string");
        let vecs_file = json.get("vecs_file").expect("vecs_file was not supplied through json").as_str().expect("cannot cast vecs_file to string");
        let output_dir = json.get("output_dir").expect("output_dir was not supplied through json").as_str().expect("cannot cast output_dir to string");

        // handle default vs input parameters
        let winnow_file = match json.get("winnow_file") {
            Some(winnow_file) => Some(winnow_file.as_str().expect("panic since given winnow_file is not a string").to_owned()),
            None => None
        };
        let num_dims = match json.get("num_dims") {
            Some(num_dims) => Some(num_dims.as_i64().expect("panic since given num_dims is not numeric") as usize),
            None => None
        };
        let ascending = match json.get("ascending") {
            Some(ascending) => ascending.as_bool().expect("panic since given ascending is not boolean"),
            None => false
        };
        let num_threads = match json.get("num_threads") {
            Some(num_threads) => num_threads.as_i64().expect("panic since given num_threads is not numeric"),
            None => 4
        };

        let params = JsonTypes {
            vocab_file: vocab_file.to_owned(),
            words_file: words_file.to_owned(),
            vecs_file: vecs_file.to_owned(),
            output_dir: output_dir.to_owned(),
            winnow_file: winnow_file,
            num_dims: num_dims,
            ascending: ascending,
            num_threads: num_threads as usize
        };

        Ok (
            Self {
                params: params
            }
        )
    }

}


pub mod files_handling {

    use ndarray::Array2;
    use ndarray_npy::{ReadNpyError, read_npy};
    use std::{fs::{self, File}, error::Error, collections::HashMap, io::{BufRead, BufReader}};

    use crate::scoring::ScoredPair;

    pub fn read_input<R: ReadFile>(file_path: &str) -> Result<<R as ReadFile>::Item, <R as ReadFile>::Error> {
        let input = <R as ReadFile>::read_file(file_path)?;
        Ok(input)
    }

    pub fn save_output<S: SaveFile>(output_dir: &str, file_name: &str, item: S) -> Result<(), <S as SaveFile>::Error> {

        // create output folder
        if let Err(e) = fs::create_dir_all(output_dir) {
            panic!("{}", e)
        }

        item.save_file(output_dir, file_name)?;
        return Ok(())

    }

    pub trait ReadFile {
        type Error;
        type Item;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error>;
    }

    // word lists (the vocabulary and the optional winnow words), one word per line
    impl ReadFile for Vec<String> {
        type Error = std::io::Error;
        type Item = Self;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error> {
            let in_file = file_path.to_string() + ".txt";

            let f = BufReader::new(File::open(in_file)?);
            let mut items: Vec<String> = Vec::new();
            for line in f.lines() {
                let line = line?;
                let word = line.trim();
                if !word.is_empty() {
                    items.push(word.to_string());
                }
            }
            return Ok(items)
        }
    }

    // the token to row index map of the trained space, saved as json text
    impl ReadFile for HashMap<String, usize> {
        type Error = std::io::Error;
        type Item = Self;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error> {
            let in_file = file_path.to_string() + ".txt";
            let f = File::open(in_file)?;
            let item = serde_json::from_reader(f)?;
            return Ok(item)
        }
    }

    // the trained weight matrix
    impl ReadFile for Array2<f32> {
        type Error = ReadNpyError;
        type Item = Self;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error> {
            let in_file = file_path.to_string() + ".npy";
            let item = read_npy(in_file)?;
            Ok(item)
        }
    }

    pub trait SaveFile {
        type Error;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error>;
    }

    impl SaveFile for Vec<ScoredPair> {
        type Error = Box<dyn Error>;

        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error> {

            let out = output_dir.to_string() + "/" + file_name + ".csv";
            let mut wrt = csv::WriterBuilder::new().from_path(out)?;
            wrt.write_record(&["word1", "word2", "cosine"])?;

            for pair in self {
                wrt.serialize((&pair.word1, &pair.word2, pair.score))?;
            }
            wrt.flush()?;
            Ok(())

        }
    }

}
