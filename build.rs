// Copyright 2024 The chunk-translate Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// libtorch must stay linked for `Device::cuda_if_available` to see CUDA devices
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if matches!(target_os.as_str(), "linux" | "windows") {
        if let Some(lib_path) = std::env::var_os("LIBTORCH").map(std::path::PathBuf::from) {
            println!(
                "cargo:rustc-link-arg=-Wl,-rpath={}",
                lib_path.join("lib").to_string_lossy()
            );
        }
        println!("cargo:rerun-if-env-changed=LIBTORCH");
        println!("cargo:rustc-link-arg=-Wl,--no-as-needed");
        println!("cargo:rustc-link-arg=-Wl,--copy-dt-needed-entries");
        println!("cargo:rustc-link-arg=-ltorch");
    }
}
