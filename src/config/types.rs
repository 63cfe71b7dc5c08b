use serde::Deserialize;

/// File-level settings; every key mirrors a CLI flag of the same meaning.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    #[serde(rename = "type", alias = "test_type")]
    pub test_type: Option<String>,
    pub iterations: Option<u64>,
    #[serde(alias = "concurrentRequests")]
    pub concurrent_requests: Option<usize>,
    pub spikes: Option<u64>,
    #[serde(alias = "spikeInterval")]
    pub spike_interval: Option<f64>,
    pub duration: Option<f64>,
    #[serde(alias = "maxUsers")]
    pub max_users: Option<usize>,
    #[serde(alias = "rampUpPeriod")]
    pub ramp_up_period: Option<u64>,
    pub bucket: Option<String>,
    #[serde(alias = "no_cloud")]
    pub nocloud: Option<bool>,
    #[serde(alias = "outputDir")]
    pub output_dir: Option<String>,
    #[serde(alias = "storageEndpoint")]
    pub storage_endpoint: Option<String>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}
