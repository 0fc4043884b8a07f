fn main() {
    multiversx_sc_meta_lib::cli_main::<network_registry::AbiProvider>();
}
