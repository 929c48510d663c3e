//! Sample documents shared by unit tests, integration tests and benches.

/// A technology resume with explicit proficiency evidence.
pub const TECH_RESUME: &str = "\
Jane Doe
Senior Software Engineer

Summary
Expertise in Python and Docker. Led the enterprise platform team for 7 years.
Architected distributed data pipelines and mentored junior engineers.

Experience
Experienced in AWS and Kubernetes. Built the billing service with Rust and PostgreSQL.
Knowledge of Linux administration.

Skills: SQL, Excel, Machine Learning
";

/// A short certification text naming one cloud certificate.
pub const AWS_CERTIFICATE: &str =
    "This certifies that Jane Doe is an AWS Certified Solutions Architect.";

/// A healthcare resume, for industry detection.
pub const HEALTHCARE_RESUME: &str = "\
Registered nurse with clinical experience in patient care at a regional hospital.
Trained in Epic EHR and medication administration. Experience with triage.
";

/// Mentions with no proficiency evidence at all.
pub const BARE_MENTIONS: &str = "Experience with Excel.";

/// A resume of roughly `sections` repeated paragraphs, for throughput tests.
#[must_use]
pub fn long_resume(sections: usize) -> String {
    let mut text = String::with_capacity(TECH_RESUME.len() * sections);
    for _ in 0..sections {
        text.push_str(TECH_RESUME);
        text.push('\n');
    }
    text
}
