use char_similarity::SimilarityAlgorithm;

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let one = "string";
    let two = "gnirts";

    for algorithm in SimilarityAlgorithm::ALL {
        let calculator = algorithm.calculator();
        let percent_similar = calculator.calculate(one, two).unwrap() * 100.0;

        println!(
            "[{}] {} and {} are {}% similar",
            calculator.name(),
            one,
            two,
            percent_similar
        );
    }
}
