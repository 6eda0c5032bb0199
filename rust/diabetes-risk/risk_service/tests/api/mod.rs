mod test_predict;
mod test_root;
