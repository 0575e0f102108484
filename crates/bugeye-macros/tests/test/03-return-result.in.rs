fn return_result() -> std::io::Result<()> {
    Ok(())
}
