/// 每行输出的字节数
pub const DEFAULT_BYTES_PER_LINE: usize = 12;
/// 每行前的缩进
pub const LINE_INDENT: &str = "    ";

/// Render `data` as the body of a C++ array literal.
///
/// Every byte becomes a `0xHH` token. Lines hold `bytes_per_line` tokens
/// (the last one may hold fewer) and are joined with `",\n"`, so there is no
/// comma after the final token. A `bytes_per_line` of 0 is treated as 1.
pub fn bytes_to_array(data: &[u8], bytes_per_line: usize) -> String {
    let per_line = bytes_per_line.max(1);
    // "0xHH, " 每个字节 6 个字符, 加上缩进和换行
    let lines = data.len().div_ceil(per_line);
    let mut out = String::with_capacity(data.len() * 6 + lines * (LINE_INDENT.len() + 2));

    for (i, chunk) in data.chunks(per_line).enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(LINE_INDENT);
        for (j, byte) in chunk.iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("0x{byte:02X}"));
        }
    }

    out
}
