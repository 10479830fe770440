use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Storybook title prefix: `<catalog_group>/<Name>`.
    #[serde(default = "default_catalog_group")]
    pub catalog_group: String,

    #[serde(default = "default_catalog_layout")]
    pub catalog_layout: String,

    #[serde(default = "default_autodocs")]
    pub autodocs: bool,

    #[serde(default = "default_component_ext")]
    pub component_ext: String,

    #[serde(default = "default_stylesheet_ext")]
    pub stylesheet_ext: String,

    #[serde(default = "default_catalog_ext")]
    pub catalog_ext: String,

    /// Root the CLI writes `<Name>/` directories into.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_catalog_group() -> String {
    "Components".to_string()
}
fn default_catalog_layout() -> String {
    "centered".to_string()
}
fn default_autodocs() -> bool {
    true
}
fn default_component_ext() -> String {
    "tsx".to_string()
}
fn default_stylesheet_ext() -> String {
    "module.css".to_string()
}
fn default_catalog_ext() -> String {
    "stories.ts".to_string()
}
fn default_output_dir() -> String {
    "src/components".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_group: default_catalog_group(),
            catalog_layout: default_catalog_layout(),
            autodocs: true,
            component_ext: default_component_ext(),
            stylesheet_ext: default_stylesheet_ext(),
            catalog_ext: default_catalog_ext(),
            output_dir: default_output_dir(),
        }
    }
}
