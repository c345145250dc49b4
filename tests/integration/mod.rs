mod template_import;
