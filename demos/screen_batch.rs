use resume_screener::{BatchScreener, CandidateDocument, ReferenceDocument, ReferenceSet};

fn main() {
    // references
    let jd = ReferenceDocument::new(
        "jd.txt",
        "Looking for a Data Scientist with Python, Machine Learning and SQL.",
    );
    let roles = vec![
        ReferenceDocument::new("data_analyst.txt", "SQL, Excel, Tableau, statistics and data visualization."),
        ReferenceDocument::new("ml_engineer.txt", "Python, machine learning, deep learning, TensorFlow, Docker."),
    ];

    // candidates
    let candidates = vec![
        CandidateDocument::new(
            "john.txt",
            "John Doe | Male | john@gmail.com | 9876543210\nPython, SQL & 3 years of Machine-Learning!",
        ),
        CandidateDocument::new("priya.txt", "Priya. Excel, Tableau dashboards, SQL reporting, statistics projects."),
        CandidateDocument::new("empty.txt", ""),
    ];

    let screener = BatchScreener::default();
    let report = match screener.screen_batch(&candidates, &ReferenceSet::new(Some(jd), roles)) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("screening failed: {e}");
            return;
        }
    };

    // print result
    for (rank, r) in report.results.iter().enumerate() {
        println!("{}. {} {}% [{}] best fit: {}", rank + 1, r.id, r.score, r.experience, r.best_role);
        println!("   matched: {:?}", r.matched);
        println!("   missing: {:?}", r.missing);
    }
    println!("{:#?}", report.analytics);
}
