// SPDX-License-Identifier: MPL-2.0
use address_book::app::{self, IcedHost};
use address_book::config;
use address_book::i18n::resources::{DirectoryResources, EmbeddedResources, ResourceSource};
use address_book::logging;

fn main() {
    let code = {
        let (config, config_warning) = config::load();
        logging::init(&config.logging);
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let resources: Box<dyn ResourceSource> = match &config.general.translations_dir {
            Some(dir) => {
                let resources = DirectoryResources::translations(dir);
                tracing::debug!(
                    dir = %resources.root().display(),
                    "loading translations from disk"
                );
                Box::new(resources)
            }
            None => {
                tracing::debug!(
                    bundles = ?EmbeddedResources::translations(),
                    "loading embedded translations"
                );
                Box::new(EmbeddedResources)
            }
        };

        app::run(
            IcedHost::from_config(&config),
            &resources,
            std::env::args_os().collect(),
        )
    };
    std::process::exit(code);
}
