
use pairsim::Pipeline;

fn main() {
    Pipeline::run();
}
