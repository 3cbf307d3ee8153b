//! The single interactive page.
//!
//! Upload, preview, analyze and download all happen client-side against
//! `/api/analyze` and `/api/report/download`. The analyze button stays hidden
//! until an allowed file has been chosen.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>도로 운영 AI 분석 시스템</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🛣️</text></svg>">
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Apple SD Gothic Neo', 'Malgun Gothic', Roboto, sans-serif;
            background: #f4f6f8;
            min-height: 100vh;
            padding: 32px 20px;
        }

        .layout {
            display: flex;
            gap: 24px;
            max-width: 1400px;
            margin: 0 auto;
            align-items: flex-start;
        }

        .sidebar {
            flex: 0 0 320px;
            background: white;
            border-radius: 16px;
            box-shadow: 0 8px 30px rgba(0,0,0,0.08);
            padding: 24px;
        }

        .main {
            flex: 1;
            background: white;
            border-radius: 16px;
            box-shadow: 0 8px 30px rgba(0,0,0,0.08);
            padding: 32px;
        }

        h1 {
            color: #222;
            margin-bottom: 10px;
            font-size: 2em;
        }

        h2 {
            color: #333;
            margin: 24px 0 12px;
        }

        .subtitle {
            color: #666;
            margin-bottom: 24px;
        }

        .upload-area {
            border: 3px dashed #3b6fb6;
            border-radius: 12px;
            padding: 40px 16px;
            text-align: center;
            cursor: pointer;
            background: #f5f8fd;
            transition: all 0.3s;
        }

        .upload-area:hover,
        .upload-area.dragover {
            border-color: #24528f;
            background: #e9f0fb;
        }

        .upload-icon {
            font-size: 3em;
            margin-bottom: 12px;
        }

        .upload-text {
            color: #3b6fb6;
            font-weight: 600;
            margin-bottom: 6px;
        }

        .upload-hint {
            color: #999;
            font-size: 0.85em;
        }

        input[type="file"] {
            display: none;
        }

        figure {
            margin-bottom: 20px;
        }

        .preview-image {
            width: 100%;
            border-radius: 10px;
            box-shadow: 0 4px 15px rgba(0,0,0,0.1);
        }

        figcaption {
            color: #777;
            font-size: 0.85em;
            text-align: center;
            margin-top: 6px;
        }

        button {
            background: #3b6fb6;
            color: white;
            border: none;
            border-radius: 8px;
            padding: 12px 20px;
            font-size: 1em;
            font-weight: 600;
            cursor: pointer;
        }

        button:disabled {
            background: #9bb3d6;
            cursor: wait;
        }

        .info, .success, .error {
            padding: 14px 16px;
            border-radius: 10px;
            margin-top: 16px;
        }

        .info {
            background: #eaf2fc;
            color: #24528f;
        }

        .success {
            background: #e8f6ec;
            color: #1e7b3a;
        }

        .error {
            background: #fee;
            color: #c33;
            white-space: pre-wrap;
        }

        .loading {
            text-align: center;
            padding: 32px;
        }

        .spinner {
            border: 4px solid #f3f3f3;
            border-top: 4px solid #3b6fb6;
            border-radius: 50%;
            width: 44px;
            height: 44px;
            animation: spin 1s linear infinite;
            margin: 0 auto 16px;
        }

        @keyframes spin {
            0% { transform: rotate(0deg); }
            100% { transform: rotate(360deg); }
        }

        .report-text {
            background: #f8f9fb;
            border-radius: 10px;
            padding: 20px;
            color: #333;
            line-height: 1.7;
            word-break: break-word;
            margin-bottom: 16px;
        }

        .report-text h1,
        .report-text h2,
        .report-text h3,
        .report-text h4 {
            margin: 16px 0 8px;
        }

        .report-text p,
        .report-text ul,
        .report-text ol,
        .report-text table {
            margin-bottom: 10px;
        }

        .report-text ul,
        .report-text ol {
            padding-left: 24px;
        }

        .report-text table {
            border-collapse: collapse;
        }

        .report-text th,
        .report-text td {
            border: 1px solid #dde2ea;
            padding: 6px 10px;
        }

        [hidden] {
            display: none !important;
        }
    </style>
</head>
<body>
    <div class="layout">
        <aside class="sidebar">
            <div class="upload-area" id="uploadArea">
                <div class="upload-icon">📷</div>
                <div class="upload-text">도로 이미지를 업로드하세요</div>
                <div class="upload-hint">JPG, JPEG, PNG</div>
                <input type="file" id="fileInput" accept=".jpg,.jpeg,.png,image/jpeg,image/png">
            </div>
            <div class="error" id="intakeError" hidden></div>
        </aside>

        <main class="main">
            <h1>🛣️ 도로 운영 AI 분석 시스템</h1>
            <p class="subtitle">도로 이미지를 업로드하면 AI가 분석하여 운영 보고서를 자동으로 생성합니다.</p>

            <div class="info" id="emptyState">좌측에서 도로 이미지를 업로드하세요.</div>

            <section id="workspace" hidden>
                <figure>
                    <img id="previewImage" class="preview-image" alt="업로드된 이미지">
                    <figcaption>업로드된 이미지</figcaption>
                </figure>

                <button id="analyzeButton" type="button" hidden>🔍 AI 분석 실행</button>

                <div class="loading" id="loading" hidden>
                    <div class="spinner"></div>
                    <p>AI가 도로 상황을 분석 중입니다...</p>
                </div>

                <div class="error" id="analysisError" hidden></div>

                <div id="result" hidden>
                    <div class="success">✅ 분석 완료</div>
                    <h2>📊 도로운영 분석 보고서</h2>
                    <div class="report-text" id="reportText"></div>
                    <button id="downloadButton" type="button">📄 보고서 다운로드</button>
                </div>
            </section>
        </main>
    </div>

    <script>
        const ALLOWED_EXTENSIONS = ['jpg', 'jpeg', 'png'];

        const uploadArea = document.getElementById('uploadArea');
        const fileInput = document.getElementById('fileInput');
        const intakeError = document.getElementById('intakeError');
        const emptyState = document.getElementById('emptyState');
        const workspace = document.getElementById('workspace');
        const previewImage = document.getElementById('previewImage');
        const analyzeButton = document.getElementById('analyzeButton');
        const loading = document.getElementById('loading');
        const analysisError = document.getElementById('analysisError');
        const result = document.getElementById('result');
        const reportText = document.getElementById('reportText');
        const downloadButton = document.getElementById('downloadButton');

        let currentFile = null;
        let currentReport = null;
        let download = null;

        function isAllowed(file) {
            const dot = file.name.lastIndexOf('.');
            if (dot < 0) return false;
            return ALLOWED_EXTENSIONS.includes(file.name.slice(dot + 1).toLowerCase());
        }

        function resetResult() {
            currentReport = null;
            download = null;
            result.hidden = true;
            analysisError.hidden = true;
            reportText.innerHTML = '';
        }

        function clearSelection() {
            currentFile = null;
            resetResult();
            workspace.hidden = true;
            analyzeButton.hidden = true;
            emptyState.hidden = false;
        }

        function selectFile(file) {
            intakeError.hidden = true;
            if (!isAllowed(file)) {
                clearSelection();
                intakeError.textContent = '지원하지 않는 파일 형식입니다: ' + file.name + ' (jpg, jpeg, png만 허용)';
                intakeError.hidden = false;
                return;
            }

            currentFile = file;
            resetResult();

            const reader = new FileReader();
            reader.onload = (e) => {
                previewImage.src = e.target.result;
            };
            reader.readAsDataURL(file);

            emptyState.hidden = true;
            workspace.hidden = false;
            analyzeButton.hidden = false;
        }

        uploadArea.addEventListener('click', () => fileInput.click());
        fileInput.addEventListener('click', (e) => e.stopPropagation());

        uploadArea.addEventListener('dragover', (e) => {
            e.preventDefault();
            uploadArea.classList.add('dragover');
        });

        uploadArea.addEventListener('dragleave', () => {
            uploadArea.classList.remove('dragover');
        });

        uploadArea.addEventListener('drop', (e) => {
            e.preventDefault();
            uploadArea.classList.remove('dragover');
            const file = e.dataTransfer.files[0];
            if (file) {
                selectFile(file);
            }
        });

        fileInput.addEventListener('change', (e) => {
            const file = e.target.files[0];
            if (file) {
                selectFile(file);
            } else {
                clearSelection();
            }
        });

        analyzeButton.addEventListener('click', async () => {
            if (!currentFile) return;

            resetResult();
            analyzeButton.disabled = true;
            fileInput.disabled = true;
            loading.hidden = false;

            const formData = new FormData();
            formData.append('image', currentFile, currentFile.name);

            try {
                const response = await fetch('/api/analyze', {
                    method: 'POST',
                    body: formData
                });

                let body = null;
                try {
                    body = await response.json();
                } catch (_) {
                    body = null;
                }

                if (!response.ok) {
                    const message = body && body.error ? body.error : ('오류 발생: HTTP ' + response.status);
                    throw new Error(message);
                }

                currentReport = body.report;
                download = body.download;
                reportText.innerHTML = body.report_html;
                result.hidden = false;
            } catch (error) {
                analysisError.textContent = '❌ ' + error.message;
                analysisError.hidden = false;
            } finally {
                loading.hidden = true;
                analyzeButton.disabled = false;
                fileInput.disabled = false;
            }
        });

        downloadButton.addEventListener('click', async () => {
            if (currentReport === null) return;

            const response = await fetch('/api/report/download', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ report: currentReport })
            });
            if (!response.ok) {
                analysisError.textContent = '❌ 오류 발생: HTTP ' + response.status;
                analysisError.hidden = false;
                return;
            }

            const blob = await response.blob();
            const url = URL.createObjectURL(blob);
            const link = document.createElement('a');
            link.href = url;
            link.download = download ? download.file_name : '도로운영_분석보고서.txt';
            document.body.appendChild(link);
            link.click();
            link.remove();
            URL.revokeObjectURL(url);
        });
    </script>
</body>
</html>
"#;
