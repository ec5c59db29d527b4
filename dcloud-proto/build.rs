fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Resources shared across services come first so their imports resolve
    let proto_files = &[
        "proto/doublecloud/v1/operation.proto",
        // Services
        "proto/doublecloud/kafka/v1/version_service.proto",
        "proto/doublecloud/logs/v1/logs_export.proto",
    ];

    let proto_folder = "proto";

    tonic_prost_build::configure()
        .build_client(true)
        .build_server(true)
        .compile_protos(proto_files, &[proto_folder])?;

    println!("cargo:rerun-if-changed={proto_folder}");

    Ok(())
}
