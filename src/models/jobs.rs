use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: String,
}

/// Mock job-board listings. Served as-is until real postings land.
pub fn listings() -> Vec<Job> {
    vec![
        Job {
            id: 1,
            title: "Construction Worker".to_string(),
            location: "Tokyo".to_string(),
            salary: "250,000 JPY".to_string(),
            job_type: "Ikusei Shūurō".to_string(),
        },
        Job {
            id: 2,
            title: "Food Processing".to_string(),
            location: "Osaka".to_string(),
            salary: "220,000 JPY".to_string(),
            job_type: "Tokutei Ginou".to_string(),
        },
        Job {
            id: 3,
            title: "Care Worker".to_string(),
            location: "Nagoya".to_string(),
            salary: "235,000 JPY".to_string(),
            job_type: "Ikusei Shūurō".to_string(),
        },
        Job {
            id: 4,
            title: "Agricultural Labor".to_string(),
            location: "Hokkaido".to_string(),
            salary: "210,000 JPY".to_string(),
            job_type: "Tokutei Ginou".to_string(),
        },
    ]
}
