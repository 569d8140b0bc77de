use crate::config::Config;
use crate::errors::AppResult;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("{}", serde_yaml::to_string(&cfg.redacted())?);
        Ok(())
    }
}
