// End-to-end tests: dictionary -> index -> solutions -> accessibility -> calibration

use spelling_bee::accessibility::{AccessibilityEstimator, Estimator, FrequencyModel, RarityParams};
use spelling_bee::calibration::{
    Quantity, Ratings, ThresholdModel, ThresholdRecord, build_dataset, evaluate_estimators,
};
use spelling_bee::commands::{SelectionConfig, generate_weeks, inspect_word, solve_puzzle};
use spelling_bee::core::{LetterSet, Puzzle};
use spelling_bee::solver::WordIndex;
use spelling_bee::wordlists::words_from_str;

const DICTIONARY: &str = "\
lengthened
lengthen
length
tenet
teeth
gentle
deleted
legged
ledge
abracadabrazy
abrac
barca
barbar
Caps
then
";

fn dictionary() -> Vec<String> {
    words_from_str(DICTIONARY)
}

/// Historical thresholds that are exactly linear in the solution count
fn records() -> Vec<ThresholdRecord> {
    [
        (("e", "dghntl"), 9),
        (("h", "deglnt"), 4),
        (("c", "abdryz"), 3),
        (("a", "bcdryz"), 4),
        (("d", "eghlnt"), 4),
        (("z", "abcdry"), 1),
    ]
    .into_iter()
    .map(|((required, optional), count)| ThresholdRecord {
        puzzle: Puzzle::parse(required, optional).unwrap(),
        good: 2 * count,
        excellent: 3 * count,
        genius: 4 * count,
    })
    .collect()
}

#[test]
fn index_from_raw_dictionary() {
    let index = WordIndex::new(dictionary());

    assert_eq!(index.words().len(), 13);
    assert!(!index.contains("Caps"));
    assert!(!index.contains("then"));
    assert_eq!(index.pots().len(), 2);
    assert_eq!(index.puzzles().len(), 14);
    assert!(index.pots().contains(&LetterSet::of("lengthened")));
}

#[test]
fn solve_and_inspect() {
    let words = dictionary();
    let index = WordIndex::new(&words);

    let report = solve_puzzle(&index, Puzzle::parse("c", "abdryz").unwrap());
    let answers: Vec<&str> = report.entries.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(answers, ["abracadabrazy", "abrac", "barca"]);
    assert_eq!(report.score, 5);

    let inspection = inspect_word("barbar", &words, &index);
    assert!(inspection.in_dictionary);
    assert!(inspection.indexed);
    assert!(inspection.findings.iter().all(|f| !f.disqualifies()));
}

#[test]
fn dataset_solutions_come_from_index() {
    let index = WordIndex::new(dictionary());
    let data = build_dataset(&records(), &index);

    let counts: Vec<usize> = data.iter().map(|d| d.solutions.len()).collect();
    assert_eq!(counts, [9, 4, 3, 4, 4, 1]);
    assert_eq!(data[5].solutions, ["abracadabrazy"]);
}

#[test]
fn calibrate_and_predict() {
    let index = WordIndex::new(dictionary());
    let data = build_dataset(&records(), &index);
    let model = ThresholdModel::train(Estimator::count(), &data).unwrap();

    assert_eq!(
        model.predict(10.0),
        Ratings {
            good: 20,
            excellent: 30,
            genius: 40
        }
    );

    let puzzle = Puzzle::parse("e", "dghntl").unwrap();
    let solutions: Vec<&str> = index.solutions_to(&puzzle).into_iter().collect();
    let ratings = model.predict_puzzle(&puzzle, &solutions);
    assert_eq!((ratings.good, ratings.genius), (18, 36));
}

#[test]
fn compare_every_estimator() {
    let index = WordIndex::new(dictionary());
    let data = build_dataset(&records(), &index);
    let frequencies = FrequencyModel::new([
        ("lengthened", 2e-7),
        ("lengthen", 3e-6),
        ("length", 1e-4),
        ("tenet", 4e-6),
        ("teeth", 5e-5),
        ("gentle", 2e-5),
        ("deleted", 1e-5),
        ("abrac", 0.0),
        ("barca", 1e-8),
    ])
    .unwrap();
    let estimators = Estimator::all(&frequencies, RarityParams::WAMERICAN);

    let evaluations = evaluate_estimators(&data, &estimators, Quantity::Genius).unwrap();
    let names: Vec<&str> = evaluations.iter().map(|e| e.estimator).collect();
    assert_eq!(
        names,
        ["solution_count", "score", "additive_freq", "inverse_log_freq"]
    );

    let count = &evaluations[0];
    assert!(count.train_msre.abs() < 1e-9);
    assert!(count.cross_msre.abs() < 1e-9);
    assert!((count.mean_accessibility - 25.0 / 6.0).abs() < 1e-9);
    assert!(evaluations.iter().all(|e| e.mean_accessibility > 0.0));
}

#[test]
fn rare_words_make_puzzles_less_accessible() {
    let frequencies = FrequencyModel::new([("common", 1e-2), ("obscure", 1e-9)]).unwrap();
    let estimator = Estimator::inverse_log_frequency(&frequencies, RarityParams::WAMERICAN);
    let puzzle = Puzzle::parse("o", "bcmnsu").unwrap();

    let common = estimator.accessibility(&puzzle, &["common"]);
    let obscure = estimator.accessibility(&puzzle, &["obscure"]);
    assert!(common > obscure);
    assert!(common <= 1.0);
}

#[test]
fn too_few_pots_for_a_week() {
    let index = WordIndex::new(dictionary());
    let data = build_dataset(&records(), &index);
    let model = ThresholdModel::train(Estimator::count(), &data).unwrap();
    let config = SelectionConfig {
        min_score: 0,
        max_score: u32::MAX,
        seed: 0,
    };

    assert!(generate_weeks(&index, &model, 5, &config).is_empty());
}
