//! CRD generator
//!
//! Writes the provider's CustomResourceDefinitions as YAML. With
//! `CRD_OUTPUT_DIR` set, one `<group>_<plural>.yaml` file is written per CRD;
//! otherwise all CRDs are printed to stdout as a multi-document stream.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let output_dir = env::var("CRD_OUTPUT_DIR").ok().map(PathBuf::from);

    let mut documents = Vec::new();
    for crd in crds::crds() {
        let yaml = serde_yaml::to_string(&crd)
            .with_context(|| format!("Failed to serialize CRD {}", crd.spec.names.kind))?;

        match &output_dir {
            Some(dir) => {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                let path = dir.join(format!("{}_{}.yaml", crd.spec.group, crd.spec.names.plural));
                fs::write(&path, &yaml)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote {}", path.display());
            }
            None => documents.push(yaml),
        }
    }

    if output_dir.is_none() {
        println!("{}", documents.join("---\n"));
    }

    Ok(())
}
