//! CMake build-descriptor composers.
//!
//! Pure functions from a [`ProjectConfig`] to the textual documents that make
//! up the starter project. String assembly is total: given a valid config
//! these cannot fail, so they return `String` directly rather than a Result.
//!
//! The section ordering inside each document is part of the contract (see the
//! cross-cutting tests in `domain/mod.rs`): minimum-version line first, then
//! the project declaration, then the conditional blocks.

use crate::domain::config::ProjectConfig;

/// Compiler warning flags enabled for the GNU/Clang family.
const GNU_CLANG_WARNINGS: &[&str] = &[
    "-Wall",
    "-Wextra",
    "-Wpedantic",
    "-Wcast-align",
    "-Wcast-qual",
    "-Wconversion",
    "-Wctor-dtor-privacy",
    "-Wenum-compare",
    "-Wfloat-equal",
    "-Wnon-virtual-dtor",
    "-Wold-style-cast",
    "-Woverloaded-virtual",
    "-Wredundant-decls",
    "-Wsign-conversion",
    "-Wsign-promo",
    "-Wshadow",
];

/// Root `CMakeLists.txt`: minimum version, project declaration, test toggle,
/// compiler-family warning flags, and subdirectory includes.
pub fn root_cmake(config: &ProjectConfig) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "cmake_minimum_required (VERSION {})\n\n",
        config.cmake_min_version()
    ));
    body.push_str(&format!(
        "project ({} VERSION {} LANGUAGES CXX)\n\n",
        config.project_name(),
        config.project_version()
    ));

    body.push_str("option(PROJ_TESTING \"Enable unit tests\" OFF)\n\n");

    body.push_str(
        "if((CMAKE_CXX_COMPILER_ID MATCHES \"GNU\") OR (CMAKE_CXX_COMPILER_ID MATCHES \"Clang\"))\n",
    );
    body.push_str("    add_compile_options(\n");
    for flag in GNU_CLANG_WARNINGS {
        body.push_str(&format!("        {flag}\n"));
    }
    body.push_str("    )\n");
    body.push_str("elseif(CMAKE_CXX_COMPILER_ID MATCHES \"MSVC\")\n");
    body.push_str("    add_compile_options(/W4 /WX)\n");
    body.push_str("endif()\n\n");

    body.push_str(&format!("add_subdirectory ({})\n\n", config.source_dir()));

    body.push_str("if (PROJ_TESTING)\n");
    body.push_str(&format!(
        "    add_subdirectory ({})\n",
        config.tests_dir()
    ));
    body.push_str("else()\n");
    body.push_str("    message(STATUS \"Testing project is turned off\")\n");
    body.push_str("endif()");

    body
}

/// Source-directory `CMakeLists.txt`: language standard, optional Qt wiring,
/// and the executable target.
pub fn src_cmake(config: &ProjectConfig) -> String {
    let mut body = String::new();

    if config.using_qt() {
        body.push_str("set(CMAKE_AUTOUIC ON)\n");
        body.push_str("set(CMAKE_AUTOMOC ON)\n");
        body.push_str("set(CMAKE_AUTORCC ON)\n\n");
    }

    body.push_str("set(CMAKE_CXX_STANDARD 17)\n");
    body.push_str("set(CMAKE_CXX_STANDARD_REQUIRED ON)\n\n");

    if config.using_qt() {
        body.push_str("find_package(QT NAMES Qt6 Qt5 REQUIRED COMPONENTS Core)\n");
        body.push_str("find_package(Qt${QT_VERSION_MAJOR} REQUIRED COMPONENTS Core)\n\n");
    }

    body.push_str("set(SOURCE_APP\n    main.cpp\n)\n\n");

    body.push_str(&format!(
        "add_executable({} ${{SOURCE_APP}})\n\n",
        config.project_name()
    ));

    if config.using_qt() {
        body.push_str(&format!(
            "target_link_libraries({} PRIVATE Qt${{QT_VERSION_MAJOR}}::Core)\n",
            config.project_name()
        ));
    }

    body
}

/// Test-directory `CMakeLists.txt`: test sub-project, test runner, and one
/// executable/test pair per test case.
pub fn test_cmake(config: &ProjectConfig) -> String {
    let mut body = String::new();

    body.push_str(&format!("project ({})\n", config.test_project_name()));
    body.push_str("enable_testing()\n\n");

    if config.using_qt() {
        body.push_str("find_package(QT NAMES Qt6 Qt5 REQUIRED COMPONENTS Test)\n");
        body.push_str("find_package(Qt${QT_VERSION_MAJOR} REQUIRED COMPONENTS Test)\n\n");
        body.push_str("set(CMAKE_AUTOUIC ON)\n");
        body.push_str("set(CMAKE_AUTOMOC ON)\n");
        body.push_str("set(CMAKE_AUTORCC ON)\n\n");
    }

    body.push_str("set(CMAKE_CXX_STANDARD 17)\n");
    body.push_str("set(CMAKE_CXX_STANDARD_REQUIRED ON)\n\n");

    for case in config.test_case_names() {
        body.push_str(&format!("add_executable({case} {case}.cpp)\n"));
        body.push_str(&format!("add_test(NAME {case} COMMAND {case})\n"));
        if config.using_qt() {
            body.push_str(&format!(
                "target_link_libraries({case} PRIVATE Qt${{QT_VERSION_MAJOR}}::Test)\n\n"
            ));
        } else {
            body.push_str(&format!(
                "#target_link_libraries({case} PRIVATE ) # Link your test library\n\n"
            ));
        }
    }

    body
}

/// Placeholder `main.cpp`: greets and returns success. Not config-dependent.
pub fn main_cpp() -> String {
    concat!(
        "#include <iostream>\n\n",
        "int main(int argc, char* argv[])\n",
        "{\n\tstd::cout << \"Hello World!\\n\";",
        "\n\treturn 0;\n}"
    )
    .to_string()
}

/// Placeholder test case file. Deliberately empty.
pub fn test_stub() -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qt_config() -> ProjectConfig {
        ProjectConfig::new("MyApp", "3.20.1", true).unwrap()
    }

    #[test]
    fn root_first_line_is_minimum_required_with_default_version() {
        let body = root_cmake(&ProjectConfig::default());
        assert_eq!(
            body.lines().next().unwrap(),
            "cmake_minimum_required (VERSION 3.14)"
        );
    }

    #[test]
    fn root_project_line_uses_fixed_version_and_cxx() {
        let body = root_cmake(&qt_config());
        assert!(body.contains("project (MyApp VERSION 1.0 LANGUAGES CXX)"));
    }

    #[test]
    fn root_test_toggle_defaults_off() {
        let body = root_cmake(&ProjectConfig::default());
        assert!(body.contains("option(PROJ_TESTING \"Enable unit tests\" OFF)"));
        assert!(body.contains("if (PROJ_TESTING)"));
        assert!(body.contains("message(STATUS \"Testing project is turned off\")"));
    }

    #[test]
    fn root_warning_flags_cover_both_compiler_families() {
        let body = root_cmake(&ProjectConfig::default());
        assert!(body.contains("-Wall"));
        assert!(body.contains("-Wshadow"));
        assert!(body.contains("add_compile_options(/W4 /WX)"));
    }

    #[test]
    fn src_sets_cxx17_required_regardless_of_qt() {
        for qt in [false, true] {
            let body = src_cmake(&ProjectConfig::new("App", "3.14", qt).unwrap());
            assert!(body.contains("set(CMAKE_CXX_STANDARD 17)"));
            assert!(body.contains("set(CMAKE_CXX_STANDARD_REQUIRED ON)"));
        }
    }

    #[test]
    fn src_qt_wiring_present_when_enabled() {
        let body = src_cmake(&qt_config());
        assert!(body.contains("set(CMAKE_AUTOUIC ON)"));
        assert!(body.contains("set(CMAKE_AUTOMOC ON)"));
        assert!(body.contains("set(CMAKE_AUTORCC ON)"));
        assert!(body.contains("find_package(QT NAMES Qt6 Qt5 REQUIRED COMPONENTS Core)"));
        assert!(body.contains("find_package(Qt${QT_VERSION_MAJOR} REQUIRED COMPONENTS Core)"));
        assert!(body.contains("target_link_libraries(MyApp PRIVATE Qt${QT_VERSION_MAJOR}::Core)"));
    }

    #[test]
    fn src_declares_executable_from_source_set() {
        let body = src_cmake(&ProjectConfig::default());
        assert!(body.contains("set(SOURCE_APP\n    main.cpp\n)"));
        assert!(body.contains("add_executable(NoName ${SOURCE_APP})"));
    }

    #[test]
    fn test_doc_declares_sub_project_and_runner() {
        let body = test_cmake(&qt_config());
        assert!(body.starts_with("project (MyApp_test)\nenable_testing()\n\n"));
    }

    #[test]
    fn test_doc_links_qt_test_only_when_enabled() {
        let qt = test_cmake(&qt_config());
        assert!(qt.contains("find_package(QT NAMES Qt6 Qt5 REQUIRED COMPONENTS Test)"));
        assert!(
            qt.contains("target_link_libraries(test_case1 PRIVATE Qt${QT_VERSION_MAJOR}::Test)")
        );

        let plain = test_cmake(&ProjectConfig::default());
        assert!(!plain.contains("find_package"));
        assert!(
            plain.contains("#target_link_libraries(test_case1 PRIVATE ) # Link your test library")
        );
        assert!(
            plain.contains("#target_link_libraries(test_case2 PRIVATE ) # Link your test library")
        );
    }

    #[test]
    fn main_cpp_prints_greeting_and_returns_success() {
        let body = main_cpp();
        assert!(body.contains("#include <iostream>"));
        assert!(body.contains("Hello World!"));
        assert!(body.contains("return 0;"));
    }

    #[test]
    fn test_stub_is_empty() {
        assert!(test_stub().is_empty());
    }
}
