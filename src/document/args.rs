use super::RecordPolicy;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    #[arg(
        value_name = "FILE",
        default_value = "universities.json",
        help = "Universities-by-country document (json/yaml/toml)"
    )]
    pub file: String,

    #[arg(
        long,
        help = "Skip university records missing `id` or `name` instead of failing",
        default_value_t = false
    )]
    pub lenient: bool,
}

impl InputArgs {
    pub fn policy(&self) -> RecordPolicy {
        if self.lenient {
            RecordPolicy::Lenient
        } else {
            RecordPolicy::Strict
        }
    }
}
