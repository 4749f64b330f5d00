mod tests_crc32;
